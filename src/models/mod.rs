mod order;
mod product;

pub use order::{Order, OrderStatus};
pub use product::Product;

use serde::Serializer;

/// Serializes an integer cent amount as a JSON dollar number (149998 -> 1499.98).
pub(crate) fn cents_as_dollars<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(*cents as f64 / 100.0)
}
