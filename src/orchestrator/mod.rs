//! Two-turn tool-call orchestration for a single user request.
//!
//! The first model turn may ask for `exchange_rate_function`. When it does,
//! the rate lookup runs and a second turn restates the result in natural
//! language. Every failure along the way is absorbed into a [`Reply`].

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::MoneyChangerConfig;
use crate::error::MoneyChangerError;
use crate::provider::{ModelProvider, OpenAiProvider, ProviderRequest, ProviderResponse};
use crate::rates::{ExchangeRateApiClient, RateLookup};
use crate::tools::{exchange_rate_tool, EXCHANGE_RATE_TOOL_NAME};
use crate::types::*;

pub const SYSTEM_PROMPT: &str = "You are a helpful currency exchange assistant. When you receive exchange rate data, provide a natural, conversational response about the conversion.";

/// Shown when the first model turn could not be completed at all.
pub const PROCESSING_ERROR_MESSAGE: &str = "Sorry, there was an error processing your request.";

/// Shown when the first turn ended without a usable tool call or text.
pub const UNPROCESSABLE_MESSAGE: &str = "Sorry, I couldn't process that request.";

const TEMPERATURE: f64 = 1.0;
const TOP_P: f64 = 1.0;
const MAX_TOKENS: u32 = 1000;

/// Outcome of one user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text written by the model, either directly or after a conversion.
    Answer(String),
    /// Parameters were extracted but the lookup or the restatement failed.
    Degraded(String),
    /// The first turn ended with neither a valid tool call nor text.
    NoActionableResponse,
    /// The first turn failed in transport.
    Failed,
}

impl Reply {
    /// Display text for the user.
    pub fn into_text(self) -> String {
        match self {
            Self::Answer(text) | Self::Degraded(text) => text,
            Self::NoActionableResponse => UNPROCESSABLE_MESSAGE.to_string(),
            Self::Failed => PROCESSING_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(text) | Self::Degraded(text) => f.write_str(text),
            Self::NoActionableResponse => f.write_str(UNPROCESSABLE_MESSAGE),
            Self::Failed => f.write_str(PROCESSING_ERROR_MESSAGE),
        }
    }
}

/// Templated answer used when the model cannot phrase the result.
///
/// Without a converted amount the sentence still names the request so the
/// user knows what was understood.
pub fn fallback_sentence(request: &ConversionRequest, converted_amount: Option<&str>) -> String {
    match converted_amount {
        Some(converted) => format!(
            "{} {} is {} {}",
            request.base, request.amount, request.target, converted
        ),
        None => format!(
            "{} {} to {}: the exchange rate is unavailable right now.",
            request.base, request.amount, request.target
        ),
    }
}

/// Mediates between the model provider and the rate lookup.
pub struct Orchestrator {
    provider: Arc<dyn ModelProvider>,
    rates: Arc<dyn RateLookup>,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn ModelProvider>, rates: Arc<dyn RateLookup>) -> Self {
        Self { provider, rates }
    }

    /// Orchestrator backed by the configured model endpoint and ExchangeRate-API.
    pub fn from_config(config: &MoneyChangerConfig) -> Self {
        Self::new(
            Arc::new(OpenAiProvider::from_config(config)),
            Arc::new(ExchangeRateApiClient::from_config(config)),
        )
    }

    /// Answer `user_input` with display text. Never fails.
    pub async fn run(&self, user_input: &str) -> String {
        self.resolve(user_input).await.into_text()
    }

    /// Answer `user_input`, keeping track of how the answer was reached.
    pub async fn resolve(&self, user_input: &str) -> Reply {
        let first = match self.first_turn(user_input).await {
            Ok(response) => response,
            Err(e) => {
                warn!(model = self.provider.model_id(), error = %e, "first model turn failed");
                return Reply::Failed;
            }
        };

        match first.finish_reason {
            Some(FinishReason::ToolCalls) => match conversion_request(&first) {
                Ok(request) => self.convert(user_input, request).await,
                Err(e) => {
                    warn!(error = %e, "unusable tool call");
                    Reply::NoActionableResponse
                }
            },
            Some(FinishReason::Stop) if !first.text.is_empty() => Reply::Answer(first.text),
            other => {
                debug!(finish_reason = ?other, "first turn ended without an actionable response");
                Reply::NoActionableResponse
            }
        }
    }

    async fn convert(&self, user_input: &str, request: ConversionRequest) -> Reply {
        debug!(
            base = %request.base,
            target = %request.target,
            amount = %request.amount,
            "model requested a conversion"
        );

        let result = match self
            .rates
            .get_rate(&request.base, &request.target, &request.amount)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, category = ?e.category(), "rate lookup failed");
                return Reply::Degraded(fallback_sentence(&request, None));
            }
        };

        match self.restatement_turn(user_input, &result).await {
            Ok(response) if !response.text.trim().is_empty() => Reply::Answer(response.text),
            Ok(response) => {
                warn!(finish_reason = ?response.finish_reason, "restatement turn returned no text");
                Reply::Degraded(fallback_sentence(&request, Some(result.converted_amount())))
            }
            Err(e) => {
                warn!(error = %e, "restatement turn failed");
                Reply::Degraded(fallback_sentence(&request, Some(result.converted_amount())))
            }
        }
    }

    async fn first_turn(&self, user_input: &str) -> Result<ProviderResponse, MoneyChangerError> {
        let request = ProviderRequest {
            messages: vec![
                ModelMessage::system(SYSTEM_PROMPT),
                ModelMessage::user(user_input),
            ],
            settings: turn_settings(),
            tools: Some(vec![exchange_rate_tool()]),
        };
        self.provider.generate_text(&request).await
    }

    async fn restatement_turn(
        &self,
        user_input: &str,
        result: &ConversionResult,
    ) -> Result<ProviderResponse, MoneyChangerError> {
        let summary = format!(
            "I've calculated the exchange rate for you: {} {} converts to {} {}. Let me provide you with a detailed response.",
            result.base(),
            result.amount(),
            result.target(),
            result.converted_amount()
        );
        let request = ProviderRequest {
            messages: vec![
                ModelMessage::system(SYSTEM_PROMPT),
                ModelMessage::user(user_input),
                ModelMessage::assistant(summary),
            ],
            settings: turn_settings(),
            tools: None,
        };
        self.provider.generate_text(&request).await
    }
}

fn turn_settings() -> GenerationSettings {
    GenerationSettings::builder()
        .temperature(TEMPERATURE)
        .top_p(TOP_P)
        .max_tokens(MAX_TOKENS)
        .build()
}

/// Parse the first tool call of a `tool_calls` turn.
fn conversion_request(response: &ProviderResponse) -> Result<ConversionRequest, MoneyChangerError> {
    let call = response
        .tool_calls
        .first()
        .ok_or_else(|| MoneyChangerError::InvalidToolCall("turn ended for tool calls but carried none".into()))?;
    if call.name != EXCHANGE_RATE_TOOL_NAME {
        return Err(MoneyChangerError::InvalidToolCall(format!(
            "unknown tool '{}'",
            call.name
        )));
    }
    ConversionRequest::from_tool_arguments(&call.arguments)
}
