//! Product catalog: the read-only dataset the tools answer from.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{CatalogLoadError, UnknownProductType};

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "products.json";

/// Customer segment a product is offered to.
///
/// The serialized form is the exact, case-sensitive string used in the
/// catalog file and in tool arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "HNI")]
    Hni,
    #[serde(rename = "Mass")]
    Mass,
}

impl ProductType {
    /// All product types, in declaration order.
    pub const ALL: [ProductType; 3] = [ProductType::Student, ProductType::Hni, ProductType::Mass];

    /// External string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Student => "Student",
            ProductType::Hni => "HNI",
            ProductType::Mass => "Mass",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = UnknownProductType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownProductType(s.to_string()))
    }
}

const TYPE_FIELD: &str = "type";
const BALANCE_FIELD: &str = "minimum_account_balance";

/// A single catalog entry.
///
/// Only `type` and `minimum_account_balance` are interpreted. The record is
/// kept exactly as loaded (key order and number representation included) and
/// is what gets serialized back to the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Product {
    product_type: ProductType,
    minimum_account_balance: f64,
    record: Map<String, Value>,
}

impl Product {
    /// Create a product with no extra fields.
    pub fn new(product_type: ProductType, minimum_account_balance: f64) -> Self {
        let mut record = Map::new();
        record.insert(TYPE_FIELD.to_string(), Value::from(product_type.as_str()));
        record.insert(BALANCE_FIELD.to_string(), Value::from(minimum_account_balance));
        Self {
            product_type,
            minimum_account_balance,
            record,
        }
    }

    /// Attach an opaque extra field.
    ///
    /// `type` and `minimum_account_balance` are owned by [`Product::new`] and
    /// are left untouched.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != TYPE_FIELD && key != BALANCE_FIELD {
            self.record.insert(key, value.into());
        }
        self
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn minimum_account_balance(&self) -> f64 {
        self.minimum_account_balance
    }

    /// Look up any field of the original record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    /// The record as loaded.
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

impl TryFrom<Map<String, Value>> for Product {
    type Error = String;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let product_type = match record.get(TYPE_FIELD) {
            Some(Value::String(s)) => s.parse::<ProductType>().map_err(|e| e.to_string())?,
            Some(_) => return Err(format!("field `{}` must be a string", TYPE_FIELD)),
            None => return Err(format!("missing field `{}`", TYPE_FIELD)),
        };

        let minimum_account_balance = record
            .get(BALANCE_FIELD)
            .ok_or_else(|| format!("missing field `{}`", BALANCE_FIELD))?
            .as_f64()
            .ok_or_else(|| format!("field `{}` must be a number", BALANCE_FIELD))?;

        Ok(Self {
            product_type,
            minimum_account_balance,
            record,
        })
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

/// Immutable, ordered collection of products.
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate it after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of product objects.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Load the catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded {} products from {} (Student: {}, HNI: {}, Mass: {})",
            catalog.len(),
            path.display(),
            catalog.count_by_type(ProductType::Student),
            catalog.count_by_type(ProductType::Hni),
            catalog.count_by_type(ProductType::Mass),
        );

        Ok(catalog)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose type is exactly `product_type`, in catalog order.
    pub fn products_by_type(&self, product_type: ProductType) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.product_type() == product_type)
            .collect()
    }

    /// Products whose minimum account balance is at least `minimum_account_balance`.
    pub fn eligible_for(&self, minimum_account_balance: f64) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.minimum_account_balance() >= minimum_account_balance)
            .collect()
    }

    fn count_by_type(&self, product_type: ProductType) -> usize {
        self.products
            .iter()
            .filter(|p| p.product_type() == product_type)
            .count()
    }
}
