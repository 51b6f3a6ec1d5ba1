//! Process configuration (env > `.env` file > defaults).

use std::fmt;

use crate::error::MoneyChangerError;

/// GitHub Models inference endpoint (OpenAI-compatible).
pub const DEFAULT_MODEL_BASE_URL: &str = "https://models.inference.ai.azure.com";
pub const DEFAULT_MODEL_ID: &str = "gpt-4o-mini";
pub const DEFAULT_EXCHANGE_RATE_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

const MODEL_TOKEN_VAR: &str = "GITHUB_TOKEN";
const EXCHANGE_RATE_KEY_VAR: &str = "EXCHANGERATE_API_KEY";

/// Read-only configuration established once at startup.
///
/// Constructed by the binary and handed by reference to the model provider and
/// the rate lookup client.
#[derive(Clone)]
pub struct MoneyChangerConfig {
    model_token: String,
    model_base_url: String,
    model_id: String,
    exchange_rate_api_key: Option<String>,
    exchange_rate_base_url: String,
}

impl fmt::Debug for MoneyChangerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyChangerConfig")
            .field("model_token", &"..")
            .field("model_base_url", &self.model_base_url)
            .field("model_id", &self.model_id)
            .field(
                "exchange_rate_api_key",
                &self.exchange_rate_api_key.as_ref().map(|_| ".."),
            )
            .field("exchange_rate_base_url", &self.exchange_rate_base_url)
            .finish()
    }
}

impl MoneyChangerConfig {
    /// Config with the given model-provider token and default endpoints.
    pub fn new(model_token: impl Into<String>) -> Self {
        Self {
            model_token: model_token.into(),
            model_base_url: DEFAULT_MODEL_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            exchange_rate_api_key: None,
            exchange_rate_base_url: DEFAULT_EXCHANGE_RATE_BASE_URL.to_string(),
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    ///
    /// `GITHUB_TOKEN` is required. `EXCHANGERATE_API_KEY` is optional: without
    /// it every lookup fails and answers degrade to the fallback sentence.
    pub fn from_env() -> Result<Self, MoneyChangerError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MoneyChangerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let token = non_empty(MODEL_TOKEN_VAR).ok_or_else(|| {
            MoneyChangerError::Configuration(format!("Missing {MODEL_TOKEN_VAR}"))
        })?;
        let mut config = Self::new(token);

        config.exchange_rate_api_key = non_empty(EXCHANGE_RATE_KEY_VAR);
        if let Some(url) = non_empty("MONEYCHANGER_MODEL_BASE_URL") {
            config.model_base_url = url;
        }
        if let Some(model) = non_empty("MONEYCHANGER_MODEL") {
            config.model_id = model;
        }
        if let Some(url) = non_empty("EXCHANGERATE_BASE_URL") {
            config.exchange_rate_base_url = url;
        }

        Ok(config)
    }

    pub fn with_model_base_url(mut self, url: impl Into<String>) -> Self {
        self.model_base_url = url.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_exchange_rate_api_key(mut self, key: impl Into<String>) -> Self {
        self.exchange_rate_api_key = Some(key.into());
        self
    }

    pub fn with_exchange_rate_base_url(mut self, url: impl Into<String>) -> Self {
        self.exchange_rate_base_url = url.into();
        self
    }

    pub fn model_token(&self) -> &str {
        &self.model_token
    }

    pub fn model_base_url(&self) -> &str {
        &self.model_base_url
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn exchange_rate_api_key(&self) -> Option<&str> {
        self.exchange_rate_api_key.as_deref()
    }

    pub fn exchange_rate_base_url(&self) -> &str {
        &self.exchange_rate_base_url
    }
}
