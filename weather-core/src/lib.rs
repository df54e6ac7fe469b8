//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credential loading
//! - The OpenWeather client and its failure taxonomy
//! - The weather record shared with the presentation layer
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;

pub use config::{Config, FileConfig};
pub use model::WeatherRecord;
pub use provider::{WeatherError, WeatherProvider, openweather::OpenWeatherProvider};
