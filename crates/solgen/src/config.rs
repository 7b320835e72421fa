use std::path::PathBuf;

use solgen_core::compilation::CompilerSettings;

/// Language model settings.
#[derive(Debug, Clone, clap::Args)]
pub struct LlmConfig {
    /// API key for the Anthropic API
    #[clap(long, env = "CLAUDE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used to draft contracts
    #[clap(long, env = "SOLGEN_MODEL", default_value = "claude-3-5-sonnet-20240620")]
    pub model: String,

    /// Upper bound on the reply length, in tokens
    #[clap(long, env = "SOLGEN_MAX_TOKENS", default_value = "1024")]
    pub max_tokens: u64,
}

/// Compiler toolchain settings.
#[derive(Debug, Clone, clap::Args)]
pub struct CompilerConfig {
    /// Pinned solc version
    #[clap(long, env = "SOLC_VERSION", default_value = "0.8.20")]
    pub solc_version: String,

    /// Explicit path to the solc binary. Looked up when unset.
    #[clap(long, env = "SOLC_PATH")]
    pub solc_path: Option<PathBuf>,

    /// Directory the `@openzeppelin` import prefix resolves to
    #[clap(
        long,
        env = "OPENZEPPELIN_PATH",
        default_value = "./node_modules/@openzeppelin"
    )]
    pub openzeppelin_path: PathBuf,
}

impl CompilerConfig {
    pub fn settings(&self) -> CompilerSettings {
        CompilerSettings::new(&self.solc_version, self.library_path())
    }

    /// The library directory made absolute, so solc resolves it the same
    /// from any working directory. Left as given when it does not exist.
    pub fn library_path(&self) -> PathBuf {
        std::fs::canonicalize(&self.openzeppelin_path)
            .unwrap_or_else(|_| self.openzeppelin_path.clone())
    }
}

/// Process-wide configuration shared read-only by both pipelines.
#[derive(Debug, Clone, clap::Args)]
pub struct Config {
    #[clap(flatten)]
    pub llm: LlmConfig,

    #[clap(flatten)]
    pub compiler: CompilerConfig,
}
