use serde::Deserialize;
use thiserror::Error;

/// Successful body of `GET /{api_key}/pair/{base}/{target}`
///
/// Only the fields the bot uses are decoded; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PairResponse {
    pub conversion_rate: f64,
    pub time_last_update_utc: String,
}

/// Error type for ExchangeRate-API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection failure
    #[error("Request Error: {0}")]
    Request(String),
    /// Any non-success HTTP status
    #[error("HTTP Error ({0}): {1}")]
    Http(u16, String),
    /// Body was not the expected JSON
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}
