use std::sync::LazyLock;

use regex::Regex;

use super::types::GenerationResult;

/// Generic fence marker used by the model around code blocks.
pub const FENCE: &str = "```";

static SOLIDITY_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```solidity(.*?)```").expect("valid solidity fence regex"));

/// Split a model reply into code and the explanations around it.
///
/// `code` is the trimmed interior of the first ```solidity block, or empty.
/// The explanations come from splitting the whole reply on the bare fence
/// marker: the first and last segments, trimmed. Without any fence both
/// explanations are the whole trimmed reply. Never fails.
pub fn parse_reply(reply: &str) -> GenerationResult {
    let code = SOLIDITY_BLOCK
        .captures(reply)
        .and_then(|captures| captures.get(1))
        .map(|interior| interior.as_str().trim().to_string())
        .unwrap_or_default();

    let parts: Vec<&str> = reply.split(FENCE).collect();
    let first_explanation = parts.first().copied().unwrap_or_default().trim().to_string();
    let last_explanation = parts.last().copied().unwrap_or_default().trim().to_string();

    GenerationResult {
        code,
        first_explanation,
        last_explanation,
    }
}
