//! Request/response types and the executor trait hosts call into.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Caller context supplied by the host with every tool call.
///
/// Tools receive it but none of the banking tools base decisions on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContext {
    /// Agent identifier, if the host provides one.
    pub agent_id: Option<String>,
    /// Conversation/session identifier.
    pub session_id: Option<String>,
    /// Customer identifier.
    pub customer_id: Option<String>,
}

impl ToolContext {
    /// Create a context for the given agent.
    pub fn for_agent(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: Some(agent_id.into()),
            ..Self::default()
        }
    }

    /// Attach a session identifier.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Attach a customer identifier.
    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }
}

/// Result of a tool execution, as handed back to the host.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The tool call ID this result corresponds to.
    pub tool_call_id: String,
    /// The serialized result content.
    pub content: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed tool result.
    pub fn error(tool_call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: format!("Error: {}", error.into()),
            success: false,
        }
    }
}

/// A request to execute a tool.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// Unique ID for this tool call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments as a JSON object.
    pub arguments: HashMap<String, Value>,
    /// Optional caller context.
    pub context: Option<ToolContext>,
}

impl ToolRequest {
    /// Parse arguments from a JSON string.
    pub fn from_call(
        id: String,
        name: String,
        arguments_json: &str,
    ) -> Result<Self, serde_json::Error> {
        let arguments: HashMap<String, Value> = serde_json::from_str(arguments_json)?;
        Ok(Self {
            id,
            name,
            arguments,
            context: None,
        })
    }

    /// Attach caller context to an existing tool request.
    pub fn with_context(mut self, context: ToolContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Agent identifier from the context, if any.
    pub fn agent_id(&self) -> Option<&str> {
        self.context.as_ref()?.agent_id.as_deref()
    }
}

/// Trait for a tool set that a host can invoke.
///
/// The host resolves a tool call into a [`ToolRequest`] and awaits a
/// [`ToolResult`]. Failures are reported through `ToolResult::error`, never
/// by panicking, so one bad call cannot take the host down.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    async fn execute(&self, request: ToolRequest) -> ToolResult;

    /// List the tools this executor supports.
    fn supported_tools(&self) -> Vec<&str>;
}
