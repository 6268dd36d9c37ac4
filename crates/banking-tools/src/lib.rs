//! Product, card and incident tools for a banking assistant.
//!
//! This crate provides a `ToolRegistry` of tools that a conversational-agent
//! host invokes by name. The catalog-backed tools answer from a read-only
//! [`Catalog`] loaded once at startup and injected as an `Arc`; the card and
//! incident tools return fixed answers and touch no external system.
//!
//! # Architecture
//!
//! The `Tool` trait here is the crate-level contract every tool implements.
//! The [`RegistryToolExecutor`] adapter exposes a registry to a host through
//! `tool_core::ToolExecutor`, with optional allowlist and timeout policy.
//!
//! # Built-in Tools
//!
//! ## Catalog Tools
//! - [`GetProductsByType`] - Products of one [`ProductType`] (`available_products`).
//! - [`InquireEligibility`] - Products whose minimum balance is at least the given amount (`eligible_for`).
//!
//! ## Service Tools
//! - [`LockCard`] / [`UnlockCard`] - Stubs reporting `card_status`.
//! - [`ReportIncident`] - Routes an incident to a [`Specialist`] (`divert_to`).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use banking_tools::{default_registry, Catalog};
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Arc::new(Catalog::load("products.json").unwrap());
//!     let registry = default_registry(catalog);
//!
//!     let result = registry
//!         .execute_json("get_products_by_type", r#"{"product_type": "Student"}"#)
//!         .await
//!         .unwrap();
//!     println!("{}", result.content()); // {"available_products":[...]}
//! }
//! ```

mod catalog;
mod config;
mod error;
mod executor;
mod registry;
mod tool;
pub mod tools;

use std::sync::Arc;

pub use catalog::{Catalog, Product, ProductType, DEFAULT_CATALOG_PATH};
pub use config::ToolServiceConfig;
pub use error::{CatalogLoadError, ConfigError, ToolError, UnknownProductType};
pub use executor::{RegistryToolExecutor, ToolPolicy};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{
    CardStatus, GetProductsByType, InquireEligibility, LockCard, ReportIncident, Specialist,
    UnlockCard,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a registry with every banking tool registered.
///
/// Registration order is the listing order a host sees.
pub fn default_registry(catalog: Arc<Catalog>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Catalog tools
    registry.register(GetProductsByType::new(catalog.clone()));
    registry.register(InquireEligibility::new(catalog));

    // Service tools
    registry.register(ReportIncident::new());
    registry.register(LockCard::new());
    registry.register(UnlockCard::new());

    registry
}
