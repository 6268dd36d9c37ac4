//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use tool_core::{ToolContext, ToolDefinition};

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
    /// Caller context from the host.
    pub context: ToolContext,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self {
            params,
            context: ToolContext::default(),
        }
    }

    /// Create tool arguments carrying the host's caller context.
    pub fn with_context(params: HashMap<String, Value>, context: ToolContext) -> Self {
        Self { params, context }
    }

    fn require(&self, key: &str) -> Result<&Value, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.require(key)?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an f64 parameter, returning an error if missing or not a number.
    ///
    /// Integer values are accepted and widened.
    pub fn get_number(&self, key: &str) -> Result<f64, ToolError> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected number".to_string(),
            })
    }

    /// Get an integer parameter, returning an error if missing or not an integer.
    ///
    /// Any JSON integer is accepted, signed or unsigned, so the full `u64`
    /// range is available.
    pub fn get_integer(&self, key: &str) -> Result<&Number, ToolError> {
        match self.require(key)? {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n),
            _ => Err(ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected integer".to_string(),
            }),
        }
    }
}

/// Output from a tool execution.
///
/// A mapping from a fixed result key (e.g. `available_products`) to its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ToolOutput {
    pub data: Map<String, Value>,
}

impl ToolOutput {
    /// Create an output holding a single key.
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut data = Map::new();
        data.insert(key.into(), value.into());
        Self { data }
    }

    /// Create an output by serializing `value` under `key`.
    pub fn serialized<T: Serialize + ?Sized>(
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, ToolError> {
        Ok(Self::single(key, serde_json::to_value(value)?))
    }

    /// Look up a result value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The output as a JSON string, as handed to the host.
    pub fn content(&self) -> String {
        Value::Object(self.data.clone()).to_string()
    }
}

/// Trait for tools a host can invoke by name.
///
/// Tools are independent and stateless: a call depends only on its
/// arguments and on read-only data injected at construction.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's parameters.
    fn parameters(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;

    /// Definition advertised to the host.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.parameters())
    }
}
