use crate::config::CompilerConfig;
use crate::prelude::*;
use futures::future::{BoxFuture, FutureExt};
use solgen_core::compilation::{
    parse_version_banner, solcx_binary_name, versions_match, StandardJsonInput,
};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Something that compiles a standard-JSON input document.
///
/// Returns the raw standard-JSON output. Diagnostics inside that output are
/// left for the caller to inspect.
pub trait SolidityCompiler: Send + Sync {
    fn compile<'a>(
        &'a self,
        input: &'a StandardJsonInput,
    ) -> BoxFuture<'a, Result<serde_json::Value, Error>>;
}

/// `solc --standard-json` running as a child process.
#[derive(Debug, Clone)]
pub struct SolcCompiler {
    binary: PathBuf,
    allow_paths: Vec<PathBuf>,
}

impl SolcCompiler {
    pub fn new(binary: impl Into<PathBuf>, allow_paths: Vec<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            allow_paths,
        }
    }

    /// Find the pinned solc binary and make sure it reports the pinned version.
    pub async fn locate(config: &CompilerConfig) -> Result<Self> {
        let binary = resolve_binary(config)?;
        let found = detect_version(&binary).await?;

        if !versions_match(&found, &config.solc_version) {
            return Err(eyre!(
                "solc at {} is version {}, expected {}",
                binary.display(),
                found,
                config.solc_version
            ));
        }

        log::info!("Using solc {} at {}", found, binary.display());

        Ok(Self::new(binary, vec![config.library_path()]))
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl SolidityCompiler for SolcCompiler {
    fn compile<'a>(
        &'a self,
        input: &'a StandardJsonInput,
    ) -> BoxFuture<'a, Result<serde_json::Value, Error>> {
        async move {
            let payload = serde_json::to_vec(input)
                .map_err(|e| Error::CompilationFailed(f!("Failed to encode compiler input: {e}")))?;

            let mut command = Command::new(&self.binary);
            command.arg("--standard-json");
            if !self.allow_paths.is_empty() {
                let allow_paths = self
                    .allow_paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                command.arg("--allow-paths").arg(allow_paths);
            }

            let mut child = command
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(|e| {
                    Error::CompilationFailed(f!(
                        "Failed to run {}: {e}",
                        self.binary.display()
                    ))
                })?;

            // solc may exit before reading everything, its stderr still has the reason.
            let mut write_error = None;
            if let Some(mut stdin) = child.stdin.take() {
                if let Err(e) = stdin.write_all(&payload).await {
                    log::warn!("Failed to write compiler input: {e}");
                    write_error = Some(e);
                }
            }

            let output = child.wait_with_output().await.map_err(|e| {
                Error::CompilationFailed(f!("Failed to read compiler output: {e}"))
            })?;

            match serde_json::from_slice::<serde_json::Value>(&output.stdout) {
                Ok(value) => Ok(value),
                Err(e) => {
                    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                    if !stderr.is_empty() {
                        Err(Error::CompilationFailed(stderr))
                    } else if let Some(write_error) = write_error {
                        Err(Error::CompilationFailed(f!(
                            "Failed to write compiler input: {write_error}"
                        )))
                    } else {
                        Err(Error::CompilationFailed(f!(
                            "Invalid compiler output ({}): {e}",
                            output.status
                        )))
                    }
                }
            }
        }
        .boxed()
    }
}

/// Explicit path first, then a py-solcx install, then `PATH`.
fn resolve_binary(config: &CompilerConfig) -> Result<PathBuf> {
    if let Some(path) = &config.solc_path {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(eyre!("solc binary not found at {}", path.display()));
    }

    let candidates = installed_candidates(&config.solc_version);
    if let Some(path) = candidates.into_iter().find(|path| path.is_file()) {
        return Ok(path);
    }

    which::which(f!("solc-{}", config.solc_version))
        .or_else(|_| which::which("solc"))
        .map_err(|e| {
            eyre!(
                "solc {} not found ({e}). Install it or pass --solc-path",
                config.solc_version
            )
        })
}

fn installed_candidates(version: &str) -> Vec<PathBuf> {
    let Some(home) = dirs_next::home_dir() else {
        return Vec::new();
    };
    let name = solcx_binary_name(version);

    vec![
        home.join(".solcx").join(&name),
        home.join(".solcx").join(&name).join(&name),
    ]
}

async fn detect_version(binary: &Path) -> Result<String> {
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .await
        .with_context(|| f!("Failed to run {} --version", binary.display()))?;

    let banner = String::from_utf8_lossy(&output.stdout);
    parse_version_banner(&banner)
        .ok_or_else(|| eyre!("Unrecognized solc version output: {}", banner.trim()))
}
