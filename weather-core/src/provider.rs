use crate::model::WeatherRecord;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Why a lookup produced no record.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    #[error("City not found. Please check the name and try again.")]
    NotFound,

    #[error("HTTP error occurred: {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error. Please check your internet connection.")]
    Network,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current conditions for `city`.
    ///
    /// Every failure is reported through [`WeatherError`]; implementations never panic
    /// on provider or transport errors.
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_mentions_city() {
        assert!(WeatherError::NotFound.to_string().contains("City not found"));
    }

    #[test]
    fn http_error_message_carries_status_and_provider_message() {
        let err = WeatherError::Http {
            status: 401,
            message: "Invalid API key".into(),
        };

        assert_eq!(err.to_string(), "HTTP error occurred: 401: Invalid API key");
    }

    #[test]
    fn unexpected_error_message_carries_cause() {
        let err = WeatherError::Unexpected("missing field `main`".into());
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: missing field `main`"
        );
    }
}
