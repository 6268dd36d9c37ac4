//! Tool registry for managing and executing tools.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tool_core::{ToolContext, ToolDefinition};
use tracing::{debug, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Registry for managing tools.
///
/// The registry holds a collection of tools and dispatches execution
/// requests to the appropriate tool by name. Listing follows registration
/// order.
pub struct ToolRegistry {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it is replaced in place.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_shared(Arc::new(tool));
    }

    /// Register a shared tool.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, tool);
    }

    /// Get a list of registered tool names.
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the definitions advertised to the host.
    pub fn get_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Execute a tool by name with the given parameters.
    pub async fn execute(
        &self,
        name: &str,
        params: HashMap<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        self.execute_with_context(name, params, ToolContext::default())
            .await
    }

    /// Execute a tool by name on behalf of the given caller.
    pub async fn execute_with_context(
        &self,
        name: &str,
        params: HashMap<String, Value>,
        context: ToolContext,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!(
            "Executing tool '{}' with {} params (agent={:?}, session={:?})",
            name,
            params.len(),
            context.agent_id,
            context.session_id
        );

        let result = tool.execute(ToolArgs::with_context(params, context)).await?;

        debug!("Tool '{}' completed: keys={:?}", name, result.data.keys().collect::<Vec<_>>());

        Ok(result)
    }

    /// Execute a tool with JSON arguments string.
    pub async fn execute_json(
        &self,
        name: &str,
        args_json: &str,
    ) -> Result<ToolOutput, ToolError> {
        let params: HashMap<String, Value> = serde_json::from_str(args_json)?;
        self.execute(name, params).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes back the input"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {"message": {"type": "string"}}})
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let message = args.get_string("message")?;
            Ok(ToolOutput::single("echo", message))
        }
    }

    struct WhoAmI;

    #[async_trait]
    impl Tool for WhoAmI {
        fn name(&self) -> &str {
            "whoami"
        }

        fn description(&self) -> &str {
            "Reports the calling agent"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::single(
                "agent",
                args.context.agent_id.unwrap_or_default(),
            ))
        }
    }

    #[tokio::test]
    async fn test_registry_basic() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        assert!(registry.has_tool("echo"));
        assert!(!registry.has_tool("nonexistent"));
        assert_eq!(registry.list_tools(), vec!["echo"]);
        assert_eq!(registry.get_definitions()[0].name(), "echo");
    }

    #[tokio::test]
    async fn test_registry_keeps_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(WhoAmI);
        registry.register(EchoTool);
        registry.register(WhoAmI);

        assert_eq!(registry.list_tools(), vec!["whoami", "echo"]);
    }

    #[tokio::test]
    async fn test_registry_execute() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let mut params = HashMap::new();
        params.insert("message".to_string(), Value::String("hello".to_string()));

        let result = registry.execute("echo", params).await.unwrap();
        assert_eq!(result.get("echo"), Some(&json!("hello")));
    }

    #[tokio::test]
    async fn test_registry_execute_json() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);

        let result = registry
            .execute_json("echo", r#"{"message": "world"}"#)
            .await
            .unwrap();
        assert_eq!(result.content(), r#"{"echo":"world"}"#);
    }

    #[tokio::test]
    async fn test_registry_passes_context() {
        let mut registry = ToolRegistry::new();
        registry.register(WhoAmI);

        let result = registry
            .execute_with_context("whoami", HashMap::new(), ToolContext::for_agent("teller"))
            .await
            .unwrap();
        assert_eq!(result.get("agent"), Some(&json!("teller")));
    }

    #[tokio::test]
    async fn test_registry_not_found() {
        let registry = ToolRegistry::new();
        let result = registry.execute("nonexistent", HashMap::new()).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
