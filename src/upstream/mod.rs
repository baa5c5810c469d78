pub mod client;
pub mod models;

pub use client::{Endpoint, OpenWeatherClient, UpstreamError};
