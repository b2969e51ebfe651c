use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::api::exchangerate::ExchangeRateClient;

const DEFAULT_LOG_FILE: &str = "bot.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Process-wide settings, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Gateway token (`TOKEN`)
    pub bot_token: String,
    /// ExchangeRate-API key (`API_KEY`)
    pub api_key: String,
    /// Shared secret for `/log` (`LOGS_KEY`). `None` disables the command.
    pub log_secret: Option<String>,
    /// File the logger appends to and `/log` sends back (`LOG_FILE`)
    pub log_file: PathBuf,
    /// Rate API root (`EXCHANGE_RATE_API_URL`)
    pub api_base_url: String,
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(v) => Ok(Some(v)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        })
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let non_empty = |key| -> Result<Option<String>, ConfigError> {
            Ok(lookup(key)?.filter(|v| !v.is_empty()))
        };

        Ok(Self {
            bot_token: non_empty("TOKEN")?.unwrap_or_default(),
            api_key: non_empty("API_KEY")?.unwrap_or_default(),
            log_secret: non_empty("LOGS_KEY")?,
            log_file: non_empty("LOG_FILE")?
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            api_base_url: non_empty("EXCHANGE_RATE_API_URL")?
                .unwrap_or_else(|| ExchangeRateClient::DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Log a warning for every secret that was left unset.
    ///
    /// Call after logging is initialised.
    pub fn warn_missing(&self) {
        if self.bot_token.is_empty() {
            warn!("TOKEN not set");
        }
        if self.api_key.is_empty() {
            warn!("API_KEY not set, rate lookups will fail");
        }
        if self.log_secret.is_none() {
            warn!("LOGS_KEY not set, /log is disabled");
        }
    }
}
