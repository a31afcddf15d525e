use chrono::NaiveDate;

use crate::models::{Order, OrderStatus, Product};

/// Evaluated in `static` position, so a bad date fails the build instead of a request.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in seed data"),
    }
}

// (id, customer, total_cents, status, date)
static ORDERS: &[(u64, &str, i64, OrderStatus, NaiveDate)] = &[
    (1, "Sarah Chen", 154_998, OrderStatus::Shipped, ymd(2025, 10, 10)),
    (2, "Marcus Williams", 9_999, OrderStatus::Processing, ymd(2025, 10, 12)),
    (3, "Emily Rodriguez", 44_900, OrderStatus::Delivered, ymd(2025, 10, 8)),
    (4, "James Park", 119_900, OrderStatus::Pending, ymd(2025, 10, 14)),
];

// (id, name, price_cents, stock)
static PRODUCTS: &[(u64, &str, i64, u32)] = &[
    (1, "Dell XPS 15 Laptop", 129_999, 23),
    (2, "Logitech MX Master 3", 9_999, 147),
    (3, "Mechanical Keyboard - Cherry MX Blue", 12_950, 64),
    (4, "LG UltraWide 34\" Monitor", 44_999, 31),
    (5, "Sony WH-1000XM5 Headphones", 37_999, 89),
];

pub fn orders() -> Vec<Order> {
    ORDERS
        .iter()
        .map(|&(id, customer, total_cents, status, date)| {
            Order::new(id, customer, total_cents, status, date)
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, price_cents, stock)| Product::new(id, name, price_cents, stock))
        .collect()
}
