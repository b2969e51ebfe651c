use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::{ApiError, PairResponse};
use crate::models::ExchangeRate;

/// Anything that can turn a currency pair into an [`ExchangeRate`]
#[async_trait]
pub trait RateLookup: Send + Sync {
    /// Look up `base` → `target`. Failures of any kind yield [`ExchangeRate::absent`].
    async fn lookup(&self, base: &str, target: &str) -> ExchangeRate;
}

/// ExchangeRate-API v6 client
pub struct ExchangeRateClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl ExchangeRateClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://v6.exchangerate-api.com/v6";

    /// Create a client against `base_url`, normally [`Self::DEFAULT_BASE_URL`]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn pair_url(&self, base: &str, target: &str) -> String {
        format!("{}/{}/pair/{}/{}", self.base_url, self.api_key, base, target)
    }

    /// GET /{api_key}/pair/{base}/{target}
    ///
    /// # Returns
    /// * `Ok(PairResponse)` - Conversion rate and last update time
    /// * `Err(ApiError)` - Transport failure, non-success status, or bad body
    pub async fn pair(&self, base: &str, target: &str) -> Result<PairResponse, ApiError> {
        let response = self
            .http_client
            .get(self.pair_url(base, target))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http(status.as_u16(), body));
        }

        response
            .json::<PairResponse>()
            .await
            .map_err(|e| ApiError::Deserialization(e.without_url().to_string()))
    }
}

#[async_trait]
impl RateLookup for ExchangeRateClient {
    async fn lookup(&self, base: &str, target: &str) -> ExchangeRate {
        match self.pair(base, target).await {
            Ok(pair) => ExchangeRate::found(pair.conversion_rate, pair.time_last_update_utc),
            Err(e) => {
                // The URL carries the API key, so only the error text is logged
                debug!("Rate lookup {}/{} failed: {}", base, target, e);
                ExchangeRate::absent()
            }
        }
    }
}
