/// Current conditions for one city, as reported by the provider in metric units.
///
/// Built only from a complete response; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Degrees Celsius.
    pub feels_like: f64,
    pub description: String,
    /// Percent.
    pub humidity: u8,
    /// Meters per second.
    pub wind_speed: f64,
    /// Hectopascals.
    pub pressure: u32,
    /// City name as canonicalized by the provider.
    pub city: String,
    /// ISO 3166 two-letter country code.
    pub country: String,
}
