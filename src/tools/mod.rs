//! The exchange-rate tool offered to the model.

pub mod types;

pub use types::{AgentToolParameters, ParameterBuilder};

use crate::provider::ToolDefinition;

/// Name the model uses when it asks for a conversion.
pub const EXCHANGE_RATE_TOOL_NAME: &str = "exchange_rate_function";

const EXCHANGE_RATE_TOOL_DESCRIPTION: &str = "Convert a given amount of money from one currency to another. Each currency will be represented as a 3-letter code";

/// Descriptor for `exchange_rate_function(base, target, amount)`.
pub fn exchange_rate_tool() -> ToolDefinition {
    let parameters = AgentToolParameters::object()
        .string("base", "The base or original currency.", true)
        .string("target", "The target or converted currency", true)
        .string(
            "amount",
            "The amount of money to convert from the base currency.",
            true,
        )
        .deny_additional_properties()
        .build();

    ToolDefinition {
        name: EXCHANGE_RATE_TOOL_NAME.to_string(),
        description: EXCHANGE_RATE_TOOL_DESCRIPTION.to_string(),
        parameters: parameters.schema,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn exchange_rate_tool_schema_is_closed_and_all_required() {
        let tool = exchange_rate_tool();

        assert_eq!(tool.name, "exchange_rate_function");
        assert_eq!(tool.parameters["type"], "object");
        assert_eq!(tool.parameters["required"], json!(["base", "target", "amount"]));
        assert_eq!(tool.parameters["additionalProperties"], json!(false));
        for field in ["base", "target", "amount"] {
            assert_eq!(tool.parameters["properties"][field]["type"], "string");
        }
    }

    #[test]
    fn open_schema_omits_additional_properties() {
        let params = AgentToolParameters::object()
            .string("city", "City name", false)
            .build();

        assert_eq!(params.schema.get("additionalProperties"), None);
        assert_eq!(params.schema["required"], json!([]));
    }
}
