use axum::{extract::State, Json};
use serde::Serialize;

use super::service::WeatherSnapshot;
use crate::extractors::CityParam;
use crate::upstream::UpstreamError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Get current weather by city name
///
/// GET /WheatherForecast/CurrentWheatherByCityName?city=dnipro
#[utoipa::path(
    get,
    path = "/WheatherForecast/CurrentWheatherByCityName",
    tag = "weather",
    params(crate::extractors::CityQuery),
    responses(
        (status = 200, description = "Current weather for the city", body = WeatherSnapshot),
        (status = 400, description = "OpenWeatherMap request failed (e.g. city not found)", body = String, content_type = "text/plain")
    )
)]
pub async fn current_weather_by_city_name(
    State(state): State<AppState>,
    CityParam(city): CityParam,
) -> Result<Json<WeatherSnapshot>, UpstreamError> {
    let weather = state.weather_service.get_current_weather(&city).await?;
    Ok(Json(weather))
}
