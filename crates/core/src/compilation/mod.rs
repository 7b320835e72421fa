pub mod input;
pub mod output;
pub mod sanitize;
pub mod types;
pub mod version;

pub use input::{build_standard_input, StandardJsonInput, OUTPUT_SELECTION};
pub use output::{error_diagnostics, extract_artifact, ContractArtifact};
pub use sanitize::sanitize_source;
pub use types::{
    CompileRequest, CompileResult, CompilerSettings, LIBRARY_ALIAS, VIRTUAL_FILE_NAME,
};
pub use version::{parse_version_banner, solcx_binary_name, versions_match};
