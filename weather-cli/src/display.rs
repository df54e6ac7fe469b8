use weather_core::WeatherRecord;

use crate::icon;

const SEPARATOR: &str = "──────────────────────────";

pub const NO_DATA: &str = "No weather data to display.";

/// Human-readable block for a lookup result, or the fallback line when there is none.
///
/// Always ends with a newline.
pub fn render(record: Option<&WeatherRecord>) -> String {
    let Some(w) = record else {
        return format!("{NO_DATA}\n");
    };

    format!(
        "\n🌦️ Weather Information 🌦️\n\
         {SEPARATOR}\n\
         📍 {city}, {country}\n\
         {icon} {description}\n\
         🌡️ Temperature: {temperature}°C (Feels like {feels_like}°C)\n\
         💧 Humidity: {humidity}%\n\
         🌬️ Wind Speed: {wind_speed} m/s\n\
         ⏲️ Pressure: {pressure} hPa\n\
         {SEPARATOR}\n",
        city = w.city,
        country = w.country,
        icon = icon::classify(&w.description),
        description = capitalize(&w.description),
        temperature = decimal(w.temperature),
        feels_like = decimal(w.feels_like),
        humidity = w.humidity,
        wind_speed = decimal(w.wind_speed),
        pressure = w.pressure,
    )
}

/// Whole numbers keep one decimal place (`15.0`); others use the shortest exact form.
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
