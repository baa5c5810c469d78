use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::upstream::OpenWeatherClient;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// OpenWeatherMap API key, sent as the `appid` query parameter
    pub openweathermap_api_key: String,

    /// OpenWeatherMap base URL (scheme and host, no path)
    #[serde(default = "default_openweathermap_url")]
    pub openweathermap_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_openweathermap_url() -> String {
    "https://api.openweathermap.org".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .set_default("openweathermap_url", default_openweathermap_url())?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // WEATHER_PROXY_OPENWEATHERMAP_API_KEY -> openweathermap_api_key
            .add_source(
                Environment::with_prefix("WEATHER_PROXY")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Upstream client settings derived from this config
    pub fn upstream_client(&self) -> OpenWeatherClient {
        OpenWeatherClient::new(&self.openweathermap_url, &self.openweathermap_api_key)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            host: default_host(),
            port: default_port(),
            openweathermap_api_key: "secret".to_string(),
            openweathermap_url: "http://localhost:9000/".to_string(),
        }
    }

    #[test]
    fn test_bind_addr_uses_host_and_port() {
        assert_eq!(test_config().bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_upstream_client_strips_trailing_slash() {
        let client = test_config().upstream_client();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_default_openweathermap_url() {
        assert_eq!(default_openweathermap_url(), "https://api.openweathermap.org");
    }
}
