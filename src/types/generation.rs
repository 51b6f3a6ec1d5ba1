//! Generation settings and related enums.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Settings controlling text generation.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

/// Why a model turn finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn finish_reason_uses_wire_names() {
        assert_eq!(FinishReason::from_str("tool_calls").unwrap(), FinishReason::ToolCalls);
        assert_eq!(FinishReason::from_str("stop").unwrap(), FinishReason::Stop);
        assert_eq!(FinishReason::ContentFilter.to_string(), "content_filter");
        assert!(FinishReason::from_str("function_call").is_err());
    }

    #[test]
    fn builder_sets_sampling_fields() {
        let settings = GenerationSettings::builder()
            .temperature(1.0)
            .top_p(1.0)
            .max_tokens(1000)
            .build();

        assert_eq!(settings.temperature, Some(1.0));
        assert_eq!(settings.top_p, Some(1.0));
        assert_eq!(settings.max_tokens, Some(1000));
    }
}
