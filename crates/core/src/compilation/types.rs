use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name of the single in-memory source handed to the compiler.
pub const VIRTUAL_FILE_NAME: &str = "Contract.sol";

/// Import alias redirected to the local contract library.
pub const LIBRARY_ALIAS: &str = "@openzeppelin";

/// Raw contract source submitted for compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    pub code: String,
}

/// Interface descriptor and creation bytecode of the compiled contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileResult {
    /// ABI exactly as the compiler produced it.
    pub abi: serde_json::Value,
    /// Hex-encoded bytecode, without a `0x` prefix.
    pub bytecode: String,
}

/// Read-only compiler settings shared by every compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerSettings {
    /// Pinned compiler version, e.g. `0.8.20`.
    pub version: String,
    /// Local directory the [`LIBRARY_ALIAS`] import prefix resolves to.
    pub library_path: PathBuf,
}

impl CompilerSettings {
    pub fn new(version: impl Into<String>, library_path: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            library_path: library_path.into(),
        }
    }

    /// The `alias=path` remapping passed to the compiler.
    pub fn remapping(&self) -> String {
        format!("{}={}", LIBRARY_ALIAS, self.library_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remapping_points_alias_at_library_path() {
        let settings = CompilerSettings::new("0.8.20", "/opt/node_modules/@openzeppelin");
        assert_eq!(
            settings.remapping(),
            "@openzeppelin=/opt/node_modules/@openzeppelin"
        );
    }

    #[test]
    fn test_compile_request_from_json() {
        let request: CompileRequest =
            serde_json::from_str(r#"{"code": "contract A {}"}"#).unwrap();
        assert_eq!(request.code, "contract A {}");
    }
}
