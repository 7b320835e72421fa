use std::sync::LazyLock;

use regex::Regex;

static SPDX_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*// SPDX-License-Identifier:.*$").expect("valid SPDX regex")
});

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*").expect("valid line comment regex"));

/// Strip license markers and `//` comments from contract source.
///
/// Everything from `//` to the end of the line goes, including a `//` that
/// sits inside a string literal. Block comments, blank lines and layout are
/// left alone. Idempotent.
pub fn sanitize_source(source: &str) -> String {
    let source = SPDX_LINE.replace_all(source, "");
    LINE_COMMENT.replace_all(&source, "").into_owned()
}
