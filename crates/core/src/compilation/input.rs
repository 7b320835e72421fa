use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{CompilerSettings, VIRTUAL_FILE_NAME};

/// Outputs requested for every contract in every file.
pub const OUTPUT_SELECTION: [&str; 4] = ["abi", "metadata", "evm.bytecode", "evm.sourceMap"];

/// Compiler standard-JSON input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardJsonInput {
    pub language: String,
    pub sources: BTreeMap<String, Source>,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// file -> contract -> requested outputs. `*` matches everything.
    pub output_selection: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub remappings: Vec<String>,
}

impl StandardJsonInput {
    /// Content of the single virtual source file, if present.
    pub fn source(&self) -> Option<&str> {
        self.sources
            .get(VIRTUAL_FILE_NAME)
            .map(|source| source.content.as_str())
    }
}

/// Assemble the compiler input for an already sanitized source.
pub fn build_standard_input(source: &str, settings: &CompilerSettings) -> StandardJsonInput {
    let sources = BTreeMap::from([(
        VIRTUAL_FILE_NAME.to_string(),
        Source {
            content: source.to_string(),
        },
    )]);

    let every_contract = BTreeMap::from([(
        "*".to_string(),
        OUTPUT_SELECTION.iter().map(|o| o.to_string()).collect(),
    )]);

    StandardJsonInput {
        language: "Solidity".to_string(),
        sources,
        settings: Settings {
            output_selection: BTreeMap::from([("*".to_string(), every_contract)]),
            remappings: vec![settings.remapping()],
        },
    }
}
