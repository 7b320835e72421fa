#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod compile;
mod config;
mod error;
mod generate;
mod llm;
mod prelude;
mod server;
mod solc;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Draft Solidity contracts with a language model and compile them with solc"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "SOLGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve /generate_contract and /compile_contract over HTTP
    Serve(crate::server::App),

    /// Draft a contract from a description
    Generate(crate::generate::App),

    /// Compile a contract source file
    Compile(crate::compile::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::server::run(sub_app, app.global).await,
        SubCommands::Generate(sub_app) => crate::generate::run(sub_app, app.global).await,
        SubCommands::Compile(sub_app) => crate::compile::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
