use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Write whole-number floats as JSON integers (`3`, not `3.0`).
pub fn compact_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// ============================================================================
// OpenWeatherMap 2.5 response subset
// Every struct is `#[serde(default)]`: absent fields stay zero, unknown
// fields are ignored, wrong types fail decoding.
// ============================================================================

/// One reading from `/data/2.5/weather`, or one entry of a forecast `list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WeatherReading {
    /// Unix timestamp, UTC
    pub dt: i64,
    pub main: MainBlock,
    pub wind: WindBlock,
    pub clouds: CloudsBlock,
}

/// Temperatures in Celsius
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MainBlock {
    #[serde(serialize_with = "compact_f64")]
    pub temp: f64,
    #[serde(serialize_with = "compact_f64")]
    pub temp_min: f64,
    #[serde(serialize_with = "compact_f64")]
    pub temp_max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WindBlock {
    #[serde(serialize_with = "compact_f64")]
    pub speed: f64,
}

/// Cloud coverage, percent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CloudsBlock {
    pub all: i32,
}

/// Response of `/data/2.5/forecast`, entries kept in upstream order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ForecastList {
    pub list: Vec<WeatherReading>,
}
