//! Convenience re-exports for common use.

pub use crate::config::MoneyChangerConfig;
pub use crate::error::{MoneyChangerError, Result};
pub use crate::orchestrator::{Orchestrator, Reply};
pub use crate::provider::{ModelProvider, OpenAiProvider};
pub use crate::rates::{ExchangeRateApiClient, RateLookup};
pub use crate::types::{ConversionRequest, ConversionResult, FinishReason, GenerationSettings, ModelMessage, Role};
