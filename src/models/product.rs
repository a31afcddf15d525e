use serde::Serialize;

use crate::catalog::Record;

/// Catalog product entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Price stored as integer cents (e.g. 12950 = $129.50), emitted as `price`
    #[serde(rename = "price", serialize_with = "super::cents_as_dollars")]
    pub price_cents: i64,
    pub stock: u32,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price_cents: i64, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents,
            stock,
        }
    }
}

impl Record for Product {
    fn id(&self) -> u64 {
        self.id
    }
}
