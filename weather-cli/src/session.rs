//! The prompt → lookup → display loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;
use weather_core::WeatherProvider;

use crate::display;

const WELCOME: &str = "\nWelcome to the Weather App!\n\
                       Get current weather conditions for any city worldwide.\n\
                       Type 'quit' or 'exit' to end the program.\n";

const PROMPT: &str = "Enter city name: ";

pub const FAREWELL: &str = "Thank you for using the Weather App. Goodbye! 👋";

/// One line of user input, interpreted.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Exit,
    Blank,
    Lookup(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let city = line.trim();

        if city.eq_ignore_ascii_case("quit") || city.eq_ignore_ascii_case("exit") {
            Command::Exit
        } else if city.is_empty() {
            Command::Blank
        } else {
            Command::Lookup(city)
        }
    }
}

/// Run the interactive loop until the user quits or `input` is exhausted.
///
/// Lookup failures are printed and the loop keeps going; only I/O errors on
/// `input`/`out` end the session early.
pub async fn run<R, W>(provider: &dyn WeatherProvider, mut input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{WELCOME}").context("Failed to write to standard output")?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}").context("Failed to write to standard output")?;
        out.flush().context("Failed to flush standard output")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;

        if read == 0 {
            debug!("End of input reached; closing session");
            writeln!(out).context("Failed to write to standard output")?;
            break;
        }

        match Command::parse(&line) {
            Command::Exit => break,
            Command::Blank => continue,
            Command::Lookup(city) => {
                let text = match provider.current_weather(city).await {
                    Ok(record) => display::render(Some(&record)),
                    Err(err) => format!("{err}\n{}", display::render(None)),
                };
                write!(out, "{text}").context("Failed to write to standard output")?;
            }
        }
    }

    writeln!(out, "\n{FAREWELL}").context("Failed to write to standard output")?;
    out.flush().context("Failed to flush standard output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::{io::Cursor, sync::Mutex};
    use weather_core::{WeatherError, WeatherRecord};

    #[derive(Debug, Default)]
    struct FakeProvider {
        failure: Option<WeatherError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn failing(err: WeatherError) -> Self {
            Self {
                failure: Some(err),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
            self.calls.lock().expect("calls lock").push(city.to_string());

            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(WeatherRecord {
                    temperature: 15.0,
                    feels_like: 14.2,
                    description: "light rain".into(),
                    humidity: 70,
                    wind_speed: 3.5,
                    pressure: 1012,
                    city: city.to_string(),
                    country: "GB".into(),
                }),
            }
        }
    }

    async fn run_with(provider: &FakeProvider, input: &str) -> String {
        let mut out = Vec::new();
        run(provider, Cursor::new(input.to_string()), &mut out)
            .await
            .expect("session should finish cleanly");
        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn parses_exit_keywords_case_and_whitespace_insensitively() {
        for line in ["quit", "Exit", "  exit  \n", "QUIT\r\n"] {
            assert_eq!(Command::parse(line), Command::Exit, "{line:?}");
        }
        assert_eq!(Command::parse(" London \n"), Command::Lookup("London"));
        assert_eq!(Command::parse("quitting"), Command::Lookup("quitting"));
        assert_eq!(Command::parse("   \n"), Command::Blank);
    }

    #[tokio::test]
    async fn quits_immediately_on_exit_keyword() {
        let provider = FakeProvider::default();
        let out = run_with(&provider, "  Exit  \n").await;

        assert!(out.contains("Welcome to the Weather App!"));
        assert!(out.ends_with(&format!("{FAREWELL}\n")));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn looks_up_trimmed_city_and_keeps_prompting() {
        let provider = FakeProvider::default();
        let out = run_with(&provider, "  London \nParis\nquit\n").await;

        assert_eq!(provider.calls(), vec!["London", "Paris"]);
        assert!(out.contains("London, GB"));
        assert!(out.contains("Paris, GB"));
        assert!(out.contains("15.0°C (Feels like 14.2°C)"));
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains(FAREWELL));
    }

    #[tokio::test]
    async fn blank_line_reprompts_without_lookup() {
        let provider = FakeProvider::default();
        let out = run_with(&provider, "\n   \nexit\n").await;

        assert!(provider.calls().is_empty());
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[tokio::test]
    async fn not_found_prints_message_and_continues() {
        let provider = FakeProvider::failing(WeatherError::NotFound);
        let out = run_with(&provider, "Atlantis\nquit\n").await;

        assert!(out.contains("City not found. Please check the name and try again."));
        assert!(out.contains(display::NO_DATA));
        assert_eq!(out.matches(PROMPT).count(), 2);
        assert!(out.contains(FAREWELL));
    }

    #[tokio::test]
    async fn network_error_prints_message_and_continues() {
        let provider = FakeProvider::failing(WeatherError::Network);
        let out = run_with(&provider, "London\nLondon\nexit\n").await;

        assert_eq!(provider.calls().len(), 2);
        assert_eq!(
            out.matches("Network error. Please check your internet connection.")
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn end_of_input_terminates_gracefully() {
        let provider = FakeProvider::default();
        let out = run_with(&provider, "London\n").await;

        assert_eq!(provider.calls(), vec!["London"]);
        assert!(out.ends_with(&format!("{FAREWELL}\n")));
    }
}
