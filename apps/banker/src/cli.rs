//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// banker - deadlock-avoidance resource arbitration
#[derive(Parser)]
#[command(name = "banker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deadlock-avoidance resource arbitration")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the safe-state analysis on the configured system
    Safety,

    /// Request resources for a process (negative amounts release)
    #[command(alias = "req")]
    Request {
        /// Process index, starting at 0
        process: usize,

        /// One amount per resource type
        #[arg(allow_negative_numbers = true, required = true)]
        amounts: Vec<i64>,
    },

    /// Show the current allocation state
    #[command(alias = "st")]
    State,

    /// Validate a configuration file and show the state it would produce
    Check {
        /// Path to the configuration file
        path: PathBuf,
    },
}
