//! Tool definitions for host discovery.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool as advertised to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool type (always "function" for function tools).
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Function specification.
    pub function: FunctionDefinition,
}

/// Function definition for a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Name of the function.
    pub name: String,
    /// Description of what the function does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the function parameters.
    pub parameters: Value,
}

impl ToolDefinition {
    /// Create a function tool definition.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: Some(description.into()),
                parameters,
            },
        }
    }

    /// The function name.
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_definition_serializes() {
        let tool = ToolDefinition::function(
            "lock_card",
            "Given the id of the card, lock the card",
            serde_json::json!({
                "type": "object",
                "properties": { "card_id": { "type": "integer" } },
                "required": ["card_id"]
            }),
        );
        assert_eq!(tool.tool_type, "function");
        assert_eq!(tool.name(), "lock_card");

        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["parameters"]["required"][0], "card_id");
    }
}
