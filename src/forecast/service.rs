use crate::upstream::models::ForecastList;
use crate::upstream::{Endpoint, OpenWeatherClient, UpstreamError};

/// Multi-day forecast, passed through in the upstream shape
pub struct ForecastService {
    upstream: OpenWeatherClient,
}

impl ForecastService {
    pub fn new(upstream: OpenWeatherClient) -> Self {
        Self { upstream }
    }

    /// Get the 5 day / 3 hour forecast for a city.
    ///
    /// Entries keep upstream order; a body that fails to decode is an
    /// [`UpstreamError::Decode`], same as on the current weather path.
    pub async fn get_forecast(&self, city: &str) -> Result<ForecastList, UpstreamError> {
        let forecast: ForecastList = self.upstream.fetch(Endpoint::Forecast, city).await?;

        tracing::info!(city = %city, entries = forecast.list.len(), "Forecast fetched successfully");

        Ok(forecast)
    }
}
