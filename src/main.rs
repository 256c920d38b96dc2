//! CEC HAL harness CLI
//!
//! Drives a mocked HDMI-CEC hardware abstraction layer through its
//! HTTP/JSON-RPC control interface and records Pass/Fail outcomes to an
//! append-only report file.

use cec_harness::{cli, commands::Commands, common::logging};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cec-harness", about = "Test harness for a mocked HDMI-CEC HAL")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
