//! Catalog lookup tools: products by type and balance eligibility.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::catalog::{Catalog, ProductType};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Lists all catalog products of one product type.
///
/// # Parameters
///
/// - `product_type` (required): one of `"Student"`, `"HNI"`, `"Mass"`.
///   Matching is exact and case-sensitive.
///
/// # Output
///
/// `{"available_products": [...]}` in catalog order; an empty list when
/// nothing matches.
pub struct GetProductsByType {
    catalog: Arc<Catalog>,
}

impl GetProductsByType {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetProductsByType {
    fn name(&self) -> &str {
        "get_products_by_type"
    }

    fn description(&self) -> &str {
        "Get all products that match the specified product type"
    }

    fn parameters(&self) -> Value {
        let values: Vec<&str> = ProductType::ALL.iter().map(|t| t.as_str()).collect();
        json!({
            "type": "object",
            "properties": {
                "product_type": {
                    "type": "string",
                    "enum": values,
                    "description": "Customer segment of the products to list"
                }
            },
            "required": ["product_type"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let raw = args.get_string("product_type")?;
        let product_type =
            raw.parse::<ProductType>().map_err(|_| ToolError::InvalidEnumValue {
                name: "product_type".to_string(),
                value: raw.clone(),
                expected: ProductType::ALL
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let products = self.catalog.products_by_type(product_type);
        debug!("{} products of type {}", products.len(), product_type);

        ToolOutput::serialized("available_products", &products)
    }
}

/// Lists products by minimum account balance.
///
/// Returns every product whose `minimum_account_balance` is greater than or
/// equal to the supplied amount.
pub struct InquireEligibility {
    catalog: Arc<Catalog>,
}

impl InquireEligibility {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for InquireEligibility {
    fn name(&self) -> &str {
        "inquire_eligibility"
    }

    fn description(&self) -> &str {
        "Get all products which the inquirer is eligible for subject to the \
         minimum account balance condition"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "minimum_account_balance": {
                    "type": "number",
                    "description": "Account balance to compare against each product's minimum"
                }
            },
            "required": ["minimum_account_balance"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let balance = args.get_number("minimum_account_balance")?;

        // Compares product minimum >= balance, not balance >= minimum.
        let products = self.catalog.eligible_for(balance);
        debug!("{} products with minimum balance >= {}", products.len(), balance);

        ToolOutput::serialized("eligible_for", &products)
    }
}
