//! banker - deadlock-avoidance resource arbitration
//!
//! This is the CLI shell over the ops crate: it loads the configuration,
//! builds the lock-guarded operations context, dispatches one command and
//! renders the result.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use banker_config::Config;
use banker_ops::{self as ops, OperationResult, OpsCtx};
use banker_types::OutputFormat;
use clap::Parser;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;
    logging::init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("starting banker v{}", env!("CARGO_PKG_VERSION"));

    // File config (or built-in defaults), then environment, then CLI flags.
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;
    config.merge_env()?;
    let json_output = cli.global.json || config.general.default_output == OutputFormat::Json;

    let ctx = OpsCtx::new(&config.system)?;
    let renderer = OutputRenderer::new(json_output);

    let result = execute_command(cli.command, &ctx).await?;
    renderer.render_result(&result)?;

    info!("command completed");
    Ok(())
}

async fn execute_command(command: Commands, ctx: &OpsCtx) -> Result<OperationResult, CliError> {
    match command {
        Commands::Safety => Ok(OperationResult::Safety(ops::safety(ctx).await)),

        Commands::Request { process, amounts } => {
            let outcome = ops::request(ctx, process, &amounts).await?;
            Ok(OperationResult::Request(outcome))
        }

        Commands::State => Ok(OperationResult::State(ops::current_state(ctx).await)),

        Commands::Check { path } => {
            let replacement = Config::load_from_file(&path).await?;
            ops::reconfigure(ctx, &replacement.system).await?;
            Ok(OperationResult::State(ops::current_state(ctx).await))
        }
    }
}
