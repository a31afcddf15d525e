use crate::catalog::CatalogSpec;
use crate::models::{Order, Product};
use crate::seed;

/// The order catalog served by `order-service`.
#[derive(Debug, Clone, Copy)]
pub struct OrderCatalog;

impl CatalogSpec for OrderCatalog {
    type Record = Order;

    const SERVICE_NAME: &'static str = "order-api";
    const TITLE: &'static str = "Order API";
    const RESOURCE: &'static str = "orders";
    const KIND: &'static str = "Order";
    const DEFAULT_PORT: u16 = 5001;

    fn records() -> Vec<Order> {
        seed::orders()
    }
}

/// The product catalog served by `product-service`.
#[derive(Debug, Clone, Copy)]
pub struct ProductCatalog;

impl CatalogSpec for ProductCatalog {
    type Record = Product;

    const SERVICE_NAME: &'static str = "product-api";
    const TITLE: &'static str = "Product API";
    const RESOURCE: &'static str = "products";
    const KIND: &'static str = "Product";
    const DEFAULT_PORT: u16 = 5000;

    fn records() -> Vec<Product> {
        seed::products()
    }
}
