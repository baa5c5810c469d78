use axum::{extract::State, Json};

use crate::extractors::CityParam;
use crate::upstream::models::ForecastList;
use crate::upstream::UpstreamError;
use crate::AppState;

/// Get the 5 day forecast by city name
///
/// GET /WheatherForecast/WheatherForecastBycity?city=dnipro
#[utoipa::path(
    get,
    path = "/WheatherForecast/WheatherForecastBycity",
    tag = "forecast",
    params(crate::extractors::CityQuery),
    responses(
        (status = 200, description = "5 day forecast for the city, in 3 hour steps", body = ForecastList),
        (status = 400, description = "OpenWeatherMap request failed (e.g. city not found)", body = String, content_type = "text/plain")
    )
)]
pub async fn forecast_by_city(
    State(state): State<AppState>,
    CityParam(city): CityParam,
) -> Result<Json<ForecastList>, UpstreamError> {
    let forecast = state.forecast_service.get_forecast(&city).await?;
    Ok(Json(forecast))
}
