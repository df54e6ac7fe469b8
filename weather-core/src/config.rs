use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable overriding the current-weather endpoint.
pub const BASE_URL_VAR: &str = "WEATHER_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Optional configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl FileConfig {
    /// Load config from `path`, or return an empty default if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: FileConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Settings resolved once at startup and handed to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API key with everything but its last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let len = self.api_key.chars().count();
        if len <= 8 {
            return "****".to_string();
        }

        let tail: String = self.api_key.chars().skip(len - 4).collect();
        format!("****{tail}")
    }

    /// Resolve configuration for the running process.
    ///
    /// Reads `.env` from the working directory (if any) into the environment,
    /// then the on-disk config file, then the environment itself. Environment
    /// values win over the file.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err).context("Failed to load .env file"),
        }

        let file = match FileConfig::config_file_path() {
            Ok(path) => FileConfig::load_from(&path)?,
            Err(err) => {
                debug!("Skipping config file: {err}");
                FileConfig::default()
            }
        };

        Self::from_lookup(|key| std::env::var(key).ok(), file)
    }

    /// Resolve configuration from an arbitrary variable lookup and file config.
    pub fn from_lookup<F>(lookup: F, file: FileConfig) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_blank(lookup(API_KEY_VAR))
            .or_else(|| non_blank(file.api_key))
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: set `{API_KEY_VAR}` in the environment or in a `.env` file."
                )
            })?;

        let base_url = non_blank(lookup(BASE_URL_VAR))
            .or_else(|| non_blank(file.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .finish()
    }
}
