//! Host invocation contract for the banking tool set.
//!
//! A host (agent framework, plugin server, CLI) talks to tools through the
//! types in this crate:
//!
//! - [`ToolRequest`] - A named tool call with JSON arguments
//! - [`ToolContext`] - Who is calling (agent, session, customer)
//! - [`ToolResult`] - The serialized answer handed back to the host
//! - [`ToolExecutor`] - The trait a tool set implements to be callable
//! - [`ToolDefinition`] - Name, description and parameter schema for discovery
//!
//! # Example
//!
//! ```rust
//! use tool_core::{async_trait, ToolExecutor, ToolRequest, ToolResult};
//!
//! struct Ping;
//!
//! #[async_trait]
//! impl ToolExecutor for Ping {
//!     async fn execute(&self, request: ToolRequest) -> ToolResult {
//!         ToolResult::success(&request.id, "pong")
//!     }
//!
//!     fn supported_tools(&self) -> Vec<&str> {
//!         vec!["ping"]
//!     }
//! }
//! ```

mod definition;
mod executor;

pub use definition::{FunctionDefinition, ToolDefinition};
pub use executor::{ToolContext, ToolExecutor, ToolRequest, ToolResult};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
