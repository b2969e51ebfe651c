//! Exchange rate lookup models

/// Target currency used when `/currency` is given a single code
pub const DEFAULT_TARGET_CURRENCY: &str = "RUB";

/// Result of one rate lookup. Both fields are `None` when the lookup failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRate {
    pub rate: Option<f64>,
    pub updated_at: Option<String>,
}

impl ExchangeRate {
    pub fn found(rate: f64, updated_at: impl Into<String>) -> Self {
        Self {
            rate: Some(rate),
            updated_at: Some(updated_at.into()),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }
}

/// Parsed `/currency` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyRequest {
    /// No argument, or only whitespace
    Missing,
    /// One code, converted against [`DEFAULT_TARGET_CURRENCY`]
    Single(String),
    /// Explicit base and target codes
    Pair(String, String),
    /// More than two whitespace-separated tokens
    Malformed,
}
