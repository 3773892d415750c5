use serde::Deserialize;

use crate::api_client;
use crate::forecast::Units;
use crate::settings;

/// Widget icons are served from a fixed OpenWeatherMap theme path.
const ICON_BASE: &str =
    "https://openweathermap.org/themes/openweathermap/assets/vendor/owm/img/widgets";

/// One 3-hour forecast sample.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastSample {
    /// Local timestamp, "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<WeatherSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherSummary {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
}

/// 5-day/3-hour forecast payload. `list` and `city` default so a truncated
/// response degrades to an empty page instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastSample>,
    #[serde(default)]
    pub city: CityInfo,
}

/// Fetch the 3-hour forecast for the configured city in the requested units.
pub async fn get_forecast(units: Units) -> Result<ForecastResponse, String> {
    let settings = settings::get_settings();
    log::trace!("Fetching forecast for {} ({})", settings.city, units.api_param());

    let endpoint = format!(
        "/forecast?q={}&appid={}&cnt={}&units={}",
        settings.city,
        settings.api_key,
        settings.sample_count,
        units.api_param()
    );

    let result = api_client::get::<ForecastResponse>(&endpoint).await;
    match &result {
        Ok(response) => log::info!(
            "Fetched {} forecast samples for {}, {}",
            response.list.len(),
            response.city.name,
            response.city.country
        ),
        Err(e) => log::error!("Failed to fetch forecast: {}", e),
    }
    result
}

/// Image URL for a weather icon code (e.g., "10d").
pub fn icon_url(icon: &str) -> String {
    format!("{}/{}.png", ICON_BASE, icon)
}
