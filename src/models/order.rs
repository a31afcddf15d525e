use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

/// One customer order. Field order matches the JSON the API emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u64,
    pub customer: String,
    /// Total stored as integer cents, emitted as `total` in dollars
    #[serde(rename = "total", serialize_with = "super::cents_as_dollars")]
    pub total_cents: i64,
    pub status: OrderStatus,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Order {
    pub fn new(
        id: u64,
        customer: impl Into<String>,
        total_cents: i64,
        status: OrderStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            customer: customer.into(),
            total_cents,
            status,
            date,
        }
    }
}

impl Record for Order {
    fn id(&self) -> u64 {
        self.id
    }
}
