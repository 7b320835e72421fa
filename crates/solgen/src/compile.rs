use crate::config::CompilerConfig;
use crate::prelude::{eprintln, println, *};
use crate::solc::{SolcCompiler, SolidityCompiler};
use solgen_core::compilation::{
    build_standard_input, extract_artifact, sanitize_source, CompileRequest, CompileResult,
    CompilerSettings, VIRTUAL_FILE_NAME,
};

#[derive(Debug, clap::Parser)]
#[command(name = "compile")]
#[command(about = "Compile a Solidity source file and print its ABI and bytecode")]
pub struct App {
    /// Source file to compile. Use `-` to read from stdin.
    pub file: String,

    #[clap(flatten)]
    pub compiler: CompilerConfig,
}

/// Sanitize, compile and pick out the first contract of the virtual file.
///
/// Any compiler diagnostic with error severity, or a source without
/// contracts, fails the whole request. No partial results.
pub async fn compile_contract(
    compiler: &dyn SolidityCompiler,
    settings: &CompilerSettings,
    mut request: CompileRequest,
) -> Result<CompileResult, Error> {
    request.code = sanitize_source(&request.code);
    log::debug!("Compiling {} chars of sanitized source", request.code.len());

    let input = build_standard_input(&request.code, settings);
    let output = compiler.compile(&input).await?;

    let artifact =
        extract_artifact(&output, VIRTUAL_FILE_NAME).map_err(Error::CompilationFailed)?;
    log::debug!(
        "Compiled contract {} ({} bytecode chars)",
        artifact.name,
        artifact.bytecode.len()
    );

    Ok(CompileResult {
        abi: artifact.abi,
        bytecode: artifact.bytecode,
    })
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let code = if app.file == "-" {
        use tokio::io::AsyncReadExt;

        let mut code = String::new();
        tokio::io::stdin()
            .read_to_string(&mut code)
            .await
            .context("Failed to read source from stdin")?;
        code
    } else {
        tokio::fs::read_to_string(&app.file)
            .await
            .map_err(|e| eyre!("Failed to read file '{}': {}", app.file, e))?
    };

    let compiler = SolcCompiler::locate(&app.compiler).await?;

    if global.verbose {
        eprintln!("solc: {}", compiler.binary().display());
        eprintln!("Remapping: {}", app.compiler.settings().remapping());
    }

    if !app.compiler.openzeppelin_path.is_dir() {
        log::warn!(
            "Library path {} does not exist, @openzeppelin imports will fail",
            app.compiler.openzeppelin_path.display()
        );
    }

    let settings = app.compiler.settings();
    let result = compile_contract(&compiler, &settings, CompileRequest { code }).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
