use std::fmt;

use axum::http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::Instrument;

use crate::error::HttpError;
use crate::impl_into_response;

/// Units requested from OpenWeatherMap; responses are always Celsius
const UNITS: &str = "metric";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Error getting weather from OpenWeather: {}", error_chain(.0))]
    Request(#[source] reqwest::Error),

    #[error(
        "Error getting weather from OpenWeather: Response status code does not indicate success: {} ({}).",
        .0.as_u16(),
        .0.canonical_reason().unwrap_or("Unknown")
    )]
    Status(StatusCode),

    #[error("Error getting weather from OpenWeather: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error getting weather from OpenWeather: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// The request URL carries the API key, so it never reaches a message
impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

/// Every upstream failure is the caller's 400
impl HttpError for UpstreamError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "REQUEST_ERROR",
            Self::Status(_) => "UPSTREAM_STATUS",
            Self::Decode(_) => "INVALID_RESPONSE",
            Self::Task(_) => "TASK_FAILED",
        }
    }
}

impl_into_response!(UpstreamError);

fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CurrentWeather,
    Forecast,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::CurrentWeather => "/data/2.5/weather",
            Self::Forecast => "/data/2.5/forecast",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentWeather => f.write_str("weather"),
            Self::Forecast => f.write_str("forecast"),
        }
    }
}

/// Immutable OpenWeatherMap connection settings.
///
/// Holds no connection; each [`fetch`](Self::fetch) builds its own
/// `reqwest::Client` and drops it when the call finishes.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GET `endpoint` for `city` and decode the JSON body into `T`.
    ///
    /// The call runs on its own task, so dropping the returned future
    /// (e.g. the inbound request going away) does not abort it.
    pub async fn fetch<T>(&self, endpoint: Endpoint, city: &str) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.endpoint_url(endpoint);
        let api_key = self.api_key.clone();
        let city = city.to_string();

        tracing::debug!(city = %city, endpoint = %endpoint, "Fetching from OpenWeatherMap");

        let task = tokio::spawn(
            async move {
                let body = get_body(&url, &city, &api_key).await?;
                serde_json::from_str::<T>(&body).map_err(UpstreamError::from)
            }
            .in_current_span(),
        );

        task.await?
    }
}

async fn get_body(url: &str, city: &str, api_key: &str) -> Result<String, UpstreamError> {
    // Scoped to this call; released on every return path
    let client = Client::builder().build()?;

    // Query builder handles encoding of spaces and special chars in the city
    let response = client
        .get(url)
        .query(&[("q", city), ("appid", api_key), ("units", UNITS)])
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(status = %status, "Received OpenWeatherMap response");

    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::models::{ForecastList, WeatherReading};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::CurrentWeather.path(), "/data/2.5/weather");
        assert_eq!(Endpoint::Forecast.path(), "/data/2.5/forecast");
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let client = OpenWeatherClient::new("https://api.openweathermap.org/", "key");
        assert_eq!(
            client.endpoint_url(Endpoint::Forecast),
            "https://api.openweathermap.org/data/2.5/forecast"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_city_key_and_metric_units() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "New York"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dt": 7})))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), "test-key");
        let reading: WeatherReading = client
            .fetch(Endpoint::CurrentWeather, "New York")
            .await
            .unwrap();

        assert_eq!(reading.dt, 7);
    }

    #[tokio::test]
    async fn test_fetch_forecast_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"list": [{"dt": 1}, {"dt": 2}]})),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), "test-key");
        let forecast: ForecastList = client.fetch(Endpoint::Forecast, "dnipro").await.unwrap();

        assert_eq!(forecast.list.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"cod": "404", "message": "city not found"})),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), "test-key");
        let err = client
            .fetch::<WeatherReading>(Endpoint::CurrentWeather, "unknownplace123")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Status(s) if s == StatusCode::NOT_FOUND));
        assert_eq!(err.error_code(), "UPSTREAM_STATUS");
        assert_eq!(
            err.to_string(),
            "Error getting weather from OpenWeather: Response status code does not indicate success: 404 (Not Found)."
        );
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), "test-key");
        let err = client
            .fetch::<ForecastList>(Endpoint::Forecast, "dnipro")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Decode(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fetch_transport_error_hides_api_key() {
        // Nothing listens on port 1
        let client = OpenWeatherClient::new("http://127.0.0.1:1", "very-secret-key");
        let err = client
            .fetch::<WeatherReading>(Endpoint::CurrentWeather, "dnipro")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Request(_)));
        let message = err.to_string();
        assert!(message.starts_with("Error getting weather from OpenWeather: "));
        assert!(!message.contains("very-secret-key"));
    }
}
