use serde::Deserialize;
use serde_json::Value;

/// The contract picked out of a compiler output document.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractArtifact {
    pub name: String,
    pub abi: Value,
    pub bytecode: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Diagnostic {
    #[serde(default)]
    severity: String,
    #[serde(default)]
    message: String,
    formatted_message: Option<String>,
}

/// Collect the messages of every diagnostic with `error` severity.
///
/// Warnings and infos are ignored. The formatted message is preferred since
/// it carries the source excerpt.
pub fn error_diagnostics(output: &Value) -> Vec<String> {
    let Some(errors) = output.get("errors").and_then(Value::as_array) else {
        return Vec::new();
    };

    errors
        .iter()
        .filter_map(|entry| serde_json::from_value::<Diagnostic>(entry.clone()).ok())
        .filter(|diagnostic| diagnostic.severity == "error")
        .map(|diagnostic| {
            diagnostic
                .formatted_message
                .unwrap_or(diagnostic.message)
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Extract the first contract compiled from `file_name`.
///
/// Contracts are visited in the order the compiler emitted them. Fails with
/// the raw diagnostic text when the output reports errors, and when the file
/// has no contract or the contract lacks an ABI or bytecode.
pub fn extract_artifact(output: &Value, file_name: &str) -> Result<ContractArtifact, String> {
    let errors = error_diagnostics(output);
    if !errors.is_empty() {
        return Err(errors.join("\n"));
    }

    let contracts = output
        .get("contracts")
        .and_then(|contracts| contracts.get(file_name))
        .and_then(Value::as_object)
        .ok_or_else(|| format!("No contracts found in {file_name}"))?;

    let (name, contract) = contracts
        .iter()
        .next()
        .ok_or_else(|| format!("No contracts found in {file_name}"))?;

    let abi = contract
        .get("abi")
        .cloned()
        .ok_or_else(|| format!("Contract {name} has no ABI in the compiler output"))?;

    let bytecode = contract
        .pointer("/evm/bytecode/object")
        .and_then(Value::as_str)
        .ok_or_else(|| format!("Contract {name} has no bytecode in the compiler output"))?
        .to_string();

    Ok(ContractArtifact {
        name: name.clone(),
        abi,
        bytecode,
    })
}
