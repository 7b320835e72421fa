use std::sync::LazyLock;

use regex::Regex;

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Version:\s*v?(\d+\.\d+\.\d+)").expect("valid version regex")
});

/// Pull the semantic version out of `solc --version` output.
///
/// `"solc, the solidity compiler commandline interface\nVersion: 0.8.20+commit.a1b79de6.Linux.g++"`
/// yields `Some("0.8.20")`.
pub fn parse_version_banner(banner: &str) -> Option<String> {
    VERSION_LINE
        .captures(banner)
        .and_then(|captures| captures.get(1))
        .map(|version| version.as_str().to_string())
}

/// Compare a detected version against the pinned one, ignoring a `v` prefix.
pub fn versions_match(found: &str, pinned: &str) -> bool {
    found.trim().trim_start_matches('v') == pinned.trim().trim_start_matches('v')
}

/// File name py-solcx style installers use for a given version.
pub fn solcx_binary_name(version: &str) -> String {
    format!("solc-v{}", version.trim_start_matches('v'))
}
