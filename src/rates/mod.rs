//! Pair-conversion lookups against the ExchangeRate-API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::MoneyChangerConfig;
use crate::error::MoneyChangerError;
use crate::provider::http::{default_client, status_to_error};
use crate::types::{ConversionRequest, ConversionResult};

/// Source of converted amounts.
#[async_trait]
pub trait RateLookup: Send + Sync {
    /// Convert `amount` of `base` into `target`.
    async fn get_rate(
        &self,
        base: &str,
        target: &str,
        amount: &str,
    ) -> Result<ConversionResult, MoneyChangerError>;
}

/// Client for `GET {endpoint}/{key}/pair/{base}/{target}/{amount}`.
///
/// Issues exactly one request per lookup. There are no retries and no timeout
/// beyond the reqwest defaults; callers wanting either must wrap the call.
pub struct ExchangeRateApiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl ExchangeRateApiClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: default_client(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &MoneyChangerConfig) -> Self {
        Self::new(
            config.exchange_rate_api_key().map(str::to_string),
            config.exchange_rate_base_url(),
        )
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn pair_url(&self, api_key: &str, request: &ConversionRequest) -> Result<reqwest::Url, MoneyChangerError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            MoneyChangerError::Configuration(format!("Invalid exchange rate endpoint: {e}"))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                MoneyChangerError::Configuration(format!(
                    "Exchange rate endpoint cannot take a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend([
                api_key,
                "pair",
                request.base.as_str(),
                request.target.as_str(),
                request.amount.as_str(),
            ]);
        Ok(url)
    }
}

#[async_trait]
impl RateLookup for ExchangeRateApiClient {
    async fn get_rate(
        &self,
        base: &str,
        target: &str,
        amount: &str,
    ) -> Result<ConversionResult, MoneyChangerError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            MoneyChangerError::Configuration("Missing EXCHANGERATE_API_KEY".into())
        })?;
        let request = ConversionRequest::new(base, target, amount);
        let url = self.pair_url(api_key, &request)?;

        debug!(base, target, amount, "exchange rate lookup");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = provider_error_type(&body).unwrap_or(body);
            return Err(status_to_error(status.as_u16(), &message));
        }

        let data: PairResponse = serde_json::from_str(&body)?;
        if data.result.as_deref() == Some("error") {
            return Err(MoneyChangerError::InvalidResponse(format!(
                "exchange rate provider reported {}",
                data.error_type.as_deref().unwrap_or("an unknown error")
            )));
        }
        let converted = data.conversion_result.ok_or_else(|| {
            MoneyChangerError::InvalidResponse("Missing conversion_result in response".into())
        })?;

        ConversionResult::from_number(&request, &converted)
    }
}

fn provider_error_type(body: &str) -> Option<String> {
    serde_json::from_str::<PairResponse>(body).ok()?.error_type
}

#[derive(Deserialize)]
struct PairResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    conversion_result: Option<serde_json::Number>,
}
