use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::upstream::models::{compact_f64, WeatherReading};
use crate::upstream::{Endpoint, OpenWeatherClient, UpstreamError};

/// Current weather, reshaped from the upstream reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherSnapshot {
    /// Unix timestamp, UTC
    pub dt: i64,
    /// Temperature, Celsius
    #[serde(serialize_with = "compact_f64")]
    pub temp: f64,
    /// Wind speed
    #[serde(serialize_with = "compact_f64")]
    pub wind: f64,
    /// Cloud coverage, percent
    pub clouds: i32,
}

impl From<WeatherReading> for WeatherSnapshot {
    fn from(reading: WeatherReading) -> Self {
        Self {
            dt: reading.dt,
            temp: reading.main.temp,
            wind: reading.wind.speed,
            clouds: reading.clouds.all,
        }
    }
}

pub struct WeatherService {
    upstream: OpenWeatherClient,
}

impl WeatherService {
    pub fn new(upstream: OpenWeatherClient) -> Self {
        Self { upstream }
    }

    pub async fn get_current_weather(&self, city: &str) -> Result<WeatherSnapshot, UpstreamError> {
        let reading: WeatherReading = self.upstream.fetch(Endpoint::CurrentWeather, city).await?;
        let snapshot = WeatherSnapshot::from(reading);

        tracing::info!(city = %city, temp = %snapshot.temp, "Weather data fetched successfully");

        Ok(snapshot)
    }
}
