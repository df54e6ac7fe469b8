use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;

use crate::{config::Config, model::WeatherRecord};

use super::{WeatherError, WeatherProvider};

/// Client for the OpenWeather current-weather endpoint, metric units.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    masked_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key().to_owned(),
            masked_key: config.masked_api_key(),
            base_url: config.base_url().to_owned(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        debug!(
            "GET {} q={city:?} appid={} units=metric",
            self.base_url, self.masked_key
        );

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(classify_transport)?;

        let status = res.status();

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound);
        }

        if !status.is_success() {
            // The status alone is enough to classify; a lost body only costs the message.
            let body = res.text().await.unwrap_or_default();
            return Err(WeatherError::Http {
                status: status.as_u16(),
                message: provider_message(status, &body),
            });
        }

        let body = res.text().await.map_err(classify_transport)?;

        parse_current(&body)
    }
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &self.masked_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let result = self.fetch_current(city).await;

        if let Err(err) = &result {
            info!("OpenWeather lookup for {city:?} failed: {err:?}");
        }

        result
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

/// Error payload OpenWeather sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

impl TryFrom<OwCurrentResponse> for WeatherRecord {
    type Error = WeatherError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| {
                WeatherError::Unexpected("response contained no weather description".into())
            })?;

        Ok(WeatherRecord {
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            description,
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            pressure: parsed.main.pressure,
            city: parsed.name,
            country: parsed.sys.country,
        })
    }
}

fn parse_current(body: &str) -> Result<WeatherRecord, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|err| {
        WeatherError::Unexpected(format!("failed to parse OpenWeather response: {err}"))
    })?;

    WeatherRecord::try_from(parsed)
}

/// Connection, DNS, timeout and broken-stream failures are network errors;
/// anything else reqwest reports (bad URL, decoding) is unexpected.
fn classify_transport(err: reqwest::Error) -> WeatherError {
    if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
        WeatherError::Network
    } else {
        WeatherError::Unexpected(err.to_string())
    }
}

fn provider_message(status: StatusCode, body: &str) -> String {
    let reported = serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .map(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty());
    if let Some(message) = reported {
        return message;
    }

    let body = body.trim();
    if !body.is_empty() {
        return truncate_body(body);
    }

    status.canonical_reason().unwrap_or("unknown status").to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
