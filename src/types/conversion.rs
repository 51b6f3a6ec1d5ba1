//! Currency conversion request and result.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MoneyChangerError;

/// Parameters the model extracted from the user's text.
///
/// Currency codes and the amount are kept exactly as the model wrote them;
/// nothing here checks them against a currency registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionRequest {
    pub base: String,
    pub target: String,
    pub amount: String,
}

impl ConversionRequest {
    pub fn new(
        base: impl Into<String>,
        target: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            target: target.into(),
            amount: amount.into(),
        }
    }

    /// Parse tool call arguments.
    ///
    /// Accepts either a JSON object or a string holding one, since providers
    /// hand back arguments as an encoded string.
    pub fn from_tool_arguments(arguments: &serde_json::Value) -> Result<Self, MoneyChangerError> {
        let parsed = match arguments {
            serde_json::Value::String(raw) => serde_json::from_str(raw.trim()),
            other => serde_json::from_value(other.clone()),
        };
        parsed.map_err(|e| MoneyChangerError::InvalidToolCall(e.to_string()))
    }
}

/// A completed conversion. `converted_amount` always has two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    base: String,
    target: String,
    amount: String,
    converted_amount: String,
}

impl ConversionResult {
    /// Pair `request` with the provider's converted value, rounded to cents.
    pub fn from_number(
        request: &ConversionRequest,
        converted: &serde_json::Number,
    ) -> Result<Self, MoneyChangerError> {
        Ok(Self {
            base: request.base.clone(),
            target: request.target.clone(),
            amount: request.amount.clone(),
            converted_amount: format_two_decimals(converted)?,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn converted_amount(&self) -> &str {
        &self.converted_amount
    }
}

/// Format a JSON number with exactly two decimals, rounding half away from zero.
///
/// Works from the number's decimal text so `92.345` rounds to `92.35` even
/// though the nearest `f64` sits just below the midpoint.
pub fn format_two_decimals(value: &serde_json::Number) -> Result<String, MoneyChangerError> {
    let text = value.to_string();
    let decimal = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| {
            MoneyChangerError::InvalidResponse(format!("{text} is not a decimal amount: {e}"))
        })?;

    let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    Ok(rounded.to_string())
}
