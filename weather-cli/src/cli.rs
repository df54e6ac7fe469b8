use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;
use weather_core::{Config, OpenWeatherProvider};

use crate::session;

/// Top-level CLI struct.
///
/// The app is driven interactively; the only flags are clap's `--help` and `--version`.
/// Set `API_KEY` (optionally in a `.env` file) before running.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Interactive current-weather lookup powered by OpenWeather"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        debug!("Resolved configuration: {config:?}");

        let provider = OpenWeatherProvider::new(&config);

        let stdin = io::stdin();
        let stdout = io::stdout();
        session::run(&provider, stdin.lock(), stdout.lock()).await
    }
}
