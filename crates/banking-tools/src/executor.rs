//! ToolExecutor implementation backed by ToolRegistry.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tool_core::{ToolExecutor, ToolRequest, ToolResult};
use tracing::warn;

use crate::{ToolOutput, ToolRegistry};

/// Host-facing policy applied around every registry call.
#[derive(Debug, Clone, Default)]
pub struct ToolPolicy {
    /// Tools any caller may use. `None` allows every registered tool.
    pub allowlist: Option<HashSet<String>>,
    /// Per-agent tool lists; when an agent is listed here, only its own list applies.
    pub agent_allowlist: HashMap<String, HashSet<String>>,
    pub timeout: Option<Duration>,
    pub format_results_as_json: bool,
}

impl ToolPolicy {
    pub fn allow_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowlist = self.allowlist.get_or_insert_with(HashSet::new);
        for tool in tools {
            allowlist.insert(tool.into());
        }
        self
    }

    pub fn allow_agent_tools<I, S>(mut self, agent_id: impl Into<String>, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.agent_allowlist.entry(agent_id.into()).or_default();
        for tool in tools {
            entry.insert(tool.into());
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_json_results(mut self, enabled: bool) -> Self {
        self.format_results_as_json = enabled;
        self
    }
}

/// Exposes a [`ToolRegistry`] to a host through [`ToolExecutor`].
pub struct RegistryToolExecutor {
    registry: Arc<ToolRegistry>,
    policy: ToolPolicy,
}

impl RegistryToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self::with_policy(registry, ToolPolicy::default())
    }

    pub fn with_policy(registry: ToolRegistry, policy: ToolPolicy) -> Self {
        Self::from_shared(Arc::new(registry), policy)
    }

    pub fn from_shared(registry: Arc<ToolRegistry>, policy: ToolPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.registry.as_ref()
    }

    pub fn policy(&self) -> &ToolPolicy {
        &self.policy
    }

    fn is_allowed(&self, tool: &str, agent_id: Option<&str>) -> bool {
        if let Some(allowed) = agent_id.and_then(|id| self.policy.agent_allowlist.get(id)) {
            return allowed.contains(tool);
        }

        match self.policy.allowlist {
            Some(ref allowlist) => allowlist.contains(tool),
            None => true,
        }
    }

    fn format_result(&self, tool: &str, output: &ToolOutput) -> String {
        if self.policy.format_results_as_json {
            serde_json::json!({
                "tool": tool,
                "success": true,
                "content": output.data,
            })
            .to_string()
        } else {
            output.content()
        }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for RegistryToolExecutor {
    async fn execute(&self, request: ToolRequest) -> ToolResult {
        if !self.is_allowed(&request.name, request.agent_id()) {
            warn!("Blocked tool '{}' for agent {:?}", request.name, request.agent_id());
            return ToolResult::error(&request.id, "Tool not allowed");
        }

        let context = request.context.clone().unwrap_or_default();
        let execute_future =
            self.registry
                .execute_with_context(&request.name, request.arguments.clone(), context);

        let result = match self.policy.timeout {
            Some(timeout_duration) => match timeout(timeout_duration, execute_future).await {
                Ok(result) => result,
                Err(_) => {
                    return ToolResult::error(&request.id, "Tool execution timed out");
                }
            },
            None => execute_future.await,
        };

        match result {
            Ok(output) => ToolResult::success(&request.id, self.format_result(&request.name, &output)),
            Err(error) => {
                warn!("Tool '{}' failed: {}", request.name, error);
                ToolResult::error(&request.id, error.to_string())
            }
        }
    }

    fn supported_tools(&self) -> Vec<&str> {
        self.registry.list_tools()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tool, ToolArgs, ToolError};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tool_core::ToolContext;

    struct CountingTool {
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Tool for CountingTool {
        fn name(&self) -> &str {
            "counting_tool"
        }

        fn description(&self) -> &str {
            "Counts executions"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let current = self.count.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(ToolOutput::single("count", current as u64))
        }
    }

    struct SlowTool;

    #[async_trait]
    impl Tool for SlowTool {
        fn name(&self) -> &str {
            "slow_tool"
        }

        fn description(&self) -> &str {
            "Sleeps before answering"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(ToolOutput::single("done", true))
        }
    }

    fn registry_with_counter(counter: Arc<AtomicUsize>) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(CountingTool { count: counter });
        registry
    }

    fn request(name: &str) -> ToolRequest {
        ToolRequest {
            id: "1".to_string(),
            name: name.to_string(),
            arguments: HashMap::new(),
            context: None,
        }
    }

    #[tokio::test]
    async fn test_success_content_is_output_json() {
        let counter = Arc::new(AtomicUsize::new(0));
        let executor = RegistryToolExecutor::new(registry_with_counter(counter));

        let result = executor.execute(request("counting_tool")).await;
        assert!(result.success);
        assert_eq!(result.tool_call_id, "1");
        assert_eq!(result.content, r#"{"count":1}"#);
    }

    #[tokio::test]
    async fn test_allowlist_blocks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = registry_with_counter(counter.clone());
        let policy = ToolPolicy::default().allow_tools(["other_tool"]);
        let executor = RegistryToolExecutor::with_policy(registry, policy);

        let result = executor.execute(request("counting_tool")).await;
        assert!(!result.success);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_agent_allowlist_overrides_global() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = registry_with_counter(counter.clone());
        let policy = ToolPolicy::default()
            .allow_tools(["other_tool"])
            .allow_agent_tools("teller", ["counting_tool"]);
        let executor = RegistryToolExecutor::with_policy(registry, policy);

        let result = executor
            .execute(request("counting_tool").with_context(ToolContext::for_agent("teller")))
            .await;
        assert!(result.success);

        let result = executor
            .execute(request("counting_tool").with_context(ToolContext::for_agent("guest")))
            .await;
        assert!(!result.success);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_result() {
        let executor = RegistryToolExecutor::new(ToolRegistry::new());
        let result = executor.execute(request("missing")).await;
        assert!(!result.success);
        assert_eq!(result.content, "Error: Tool not found: missing");
    }

    #[tokio::test]
    async fn test_timeout() {
        let mut registry = ToolRegistry::new();
        registry.register(SlowTool);
        let policy = ToolPolicy::default().with_timeout(Duration::from_millis(20));
        let executor = RegistryToolExecutor::with_policy(registry, policy);

        let result = executor.execute(request("slow_tool")).await;
        assert!(!result.success);
        assert!(result.content.contains("timed out"));
    }

    #[tokio::test]
    async fn test_json_results() {
        let counter = Arc::new(AtomicUsize::new(0));
        let policy = ToolPolicy::default().with_json_results(true);
        let executor = RegistryToolExecutor::with_policy(registry_with_counter(counter), policy);

        let result = executor.execute(request("counting_tool")).await;
        let value: Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(
            value,
            json!({"tool": "counting_tool", "success": true, "content": {"count": 1}})
        );
        assert_eq!(executor.supported_tools(), vec!["counting_tool"]);
    }
}
