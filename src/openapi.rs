use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::upstream::models::{CloudsBlock, ForecastList, MainBlock, WeatherReading, WindBlock};
use crate::weather::WeatherSnapshot;

/// OpenAPI documentation for the weather proxy
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Proxy API",
        version = "1.0.0",
        description = "Current weather and 5 day forecasts by city name, reshaped from OpenWeatherMap. Temperatures in Celsius, timestamps in UTC Unix seconds."
    ),
    paths(
        crate::weather::handlers::current_weather_by_city_name,
        crate::forecast::handlers::forecast_by_city,
    ),
    tags(
        (name = "weather", description = "Current weather data"),
        (name = "forecast", description = "Weather forecasts")
    ),
    components(
        schemas(
            WeatherSnapshot,
            ForecastList,
            WeatherReading,
            MainBlock,
            WindBlock,
            CloudsBlock,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
