//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive prompt loop
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod display;
mod icon;
mod session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
