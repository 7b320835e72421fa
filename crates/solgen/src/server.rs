use crate::compile::compile_contract;
use crate::config::Config;
use crate::generate::generate_contract;
use crate::llm::{AnthropicGenerator, TextGenerator};
use crate::prelude::{eprintln, *};
use crate::solc::{SolcCompiler, SolidityCompiler};
use axum::{extract::State, routing::post, Json, Router};
use solgen_core::compilation::{CompileRequest, CompileResult, CompilerSettings};
use solgen_core::generation::{GenerationRequest, GenerationResult};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the contract generation and compilation endpoints over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(flatten)]
    pub config: Config,
}

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<CompilerSettings>,
    pub generator: Arc<dyn TextGenerator>,
    pub compiler: Arc<dyn SolidityCompiler>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let generator = AnthropicGenerator::new(&app.config.llm)?;
    let compiler = SolcCompiler::locate(&app.config.compiler).await?;

    if !app.config.compiler.openzeppelin_path.is_dir() {
        log::warn!(
            "Library path {} does not exist, @openzeppelin imports will fail",
            app.config.compiler.openzeppelin_path.display()
        );
    }

    let state = AppState {
        settings: Arc::new(app.config.compiler.settings()),
        generator: Arc::new(generator),
        compiler: Arc::new(compiler),
    };

    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Model: {}", app.config.llm.model);
        eprintln!("solc: {}", app.config.compiler.solc_version);
        eprintln!("Remapping: {}", state.settings.remapping());
        eprintln!("Generate endpoint: http://{}/generate_contract", addr);
        eprintln!("Compile endpoint: http://{}/compile_contract", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("solgen listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Both endpoints, open to any origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate_contract", post(generate_handler))
        .route("/compile_contract", post(compile_handler))
        .layer(cors)
        .with_state(state)
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, Error> {
    let result = generate_contract(state.generator.as_ref(), &request).await?;
    Ok(Json(result))
}

async fn compile_handler(
    State(state): State<AppState>,
    Json(request): Json<CompileRequest>,
) -> Result<Json<CompileResult>, Error> {
    let result = compile_contract(state.compiler.as_ref(), &state.settings, request).await?;
    Ok(Json(result))
}
