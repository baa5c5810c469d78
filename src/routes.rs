use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::forecast::handlers as forecast_handlers;
use crate::openapi::swagger_ui;
use crate::weather::handlers as weather_handlers;
use crate::AppState;

/// Build the weather and forecast routes
fn weather_forecast_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/CurrentWheatherByCityName",
            get(weather_handlers::current_weather_by_city_name),
        )
        .route(
            "/WheatherForecastBycity",
            get(forecast_handlers::forecast_by_city),
        )
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check at root level
        .route("/", get(weather_handlers::health))
        .route("/health", get(weather_handlers::health))
        // Published contract, plus the controller's own spelling
        .nest("/WheatherForecast", weather_forecast_routes())
        .nest("/WeatherForecast", weather_forecast_routes())
        // Swagger UI for API documentation
        .merge(swagger_ui())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
