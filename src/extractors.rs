use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for weather/forecast requests
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Name of the city to get the weather for, e.g. `dnipro`
    pub city: Option<String>,
}

/// Extracts the city from the query string.
///
/// Never rejects: a missing or unparsable `city` becomes an empty string and
/// is forwarded as is, leaving the upstream to answer for it. When `city`
/// appears more than once, the first value wins.
#[derive(Debug)]
pub struct CityParam(pub String);

impl<S> FromRequestParts<S> for CityParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Raw pairs, so a repeated `city` binds to its first value
        let city = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == "city")
                    .map(|(_, value)| value)
            })
            .unwrap_or_default();

        Ok(CityParam(city))
    }
}
