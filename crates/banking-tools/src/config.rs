//! Configuration for the banking tool service.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::DEFAULT_CATALOG_PATH;
use crate::error::ConfigError;
use crate::executor::ToolPolicy;

/// Configuration for loading the catalog and exposing the tools to a host.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolServiceConfig {
    /// Path of the JSON product catalog.
    pub catalog_path: PathBuf,

    /// Per-call timeout applied by the executor.
    pub timeout: Option<Duration>,

    /// Tools the host may call. `None` exposes all of them.
    pub allowlist: Option<Vec<String>>,

    /// Wrap results as `{"tool", "success", "content"}`.
    pub json_results: bool,
}

impl Default for ToolServiceConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            timeout: None,
            allowlist: None,
            json_results: false,
        }
    }
}

impl ToolServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BANKING_CATALOG_PATH` - Catalog file (default: products.json)
    /// - `BANKING_TOOL_TIMEOUT_MS` - Per-call timeout in milliseconds
    /// - `BANKING_TOOL_ALLOWLIST` - Comma-separated tool names
    /// - `BANKING_TOOL_JSON_RESULTS` - Wrap results in a JSON envelope (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("BANKING_CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let timeout = match lookup("BANKING_TOOL_TIMEOUT_MS") {
            Some(v) => {
                let ms: u64 = v.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "BANKING_TOOL_TIMEOUT_MS".to_string(),
                    reason: format!("'{}' is not a whole number of milliseconds", v),
                })?;
                Some(Duration::from_millis(ms))
            }
            None => None,
        };

        // An empty or blank list means "unset", not "allow nothing".
        let allowlist = lookup("BANKING_TOOL_ALLOWLIST")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
            })
            .filter(|tools| !tools.is_empty());

        let json_results = lookup("BANKING_TOOL_JSON_RESULTS")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            catalog_path,
            timeout,
            allowlist,
            json_results,
        })
    }

    /// Executor policy derived from this configuration.
    pub fn policy(&self) -> ToolPolicy {
        let mut policy = ToolPolicy::default().with_json_results(self.json_results);
        if let Some(ref tools) = self.allowlist {
            policy = policy.allow_tools(tools.iter().cloned());
        }
        if let Some(timeout) = self.timeout {
            policy = policy.with_timeout(timeout);
        }
        policy
    }
}
