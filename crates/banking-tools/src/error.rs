//! Error types for catalog loading, configuration and tool execution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the product catalog.
///
/// Any of these is fatal: the tool set does not start without a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid list of products.
    #[error("Malformed catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A product type string that names none of the known product types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown product type: {0}")]
pub struct UnknownProductType(pub String);

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A parameter did not match any value of its enumeration.
    #[error("Invalid value '{value}' for '{name}', expected one of: {expected}")]
    InvalidEnumValue {
        name: String,
        value: String,
        expected: String,
    },

    /// The incident type matches no routing set.
    #[error("No specialist handles incident type '{0}'")]
    UnroutedIncident(String),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
