//! CLI command definitions
//!
//! Defines the clap commands for the harness CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run test case scenarios against the device under test
    Run {
        /// Scenario YAML files, or directories containing them
        paths: Vec<PathBuf>,

        /// Report CSV to append outcomes to (default: data dir)
        #[arg(long)]
        report: Option<PathBuf>,

        /// JSON-RPC endpoint of the device under test
        #[arg(long)]
        device_url: Option<String>,

        /// Base URL of the mock-control listener
        #[arg(long)]
        control_url: Option<String>,

        /// Verbose output (echo each step before it runs)
        #[arg(long, short)]
        verbose: bool,
    },

    /// Parse a scenario file and report problems without executing it
    Validate {
        /// Path to the YAML scenario file
        path: PathBuf,
    },

    /// List the known device commands and their aliases
    Apis,

    /// Run the mock CEC HAL listener in the foreground
    Mock {
        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,
    },
}
