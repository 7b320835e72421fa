use serde::{Deserialize, Serialize};

/// A request to draft a contract from a natural-language description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free text describing the contract. Interpolated into the prompt as-is.
    pub description: String,
}

/// The model's reply split into code and the prose around it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Interior of the first ```solidity block, trimmed. Empty when absent.
    pub code: String,
    /// Text before the first fence.
    pub first_explanation: String,
    /// Text after the last fence.
    pub last_explanation: String,
}
