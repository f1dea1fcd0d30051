// Re-export helpers so tests can `use helpers::*;`
use std::sync::Arc;

use kassa::{Decimal, Kassa, OrderItem, OrderRecord};
use kassa_mock::MockSource;

/// Construct a UTC `DateTime` from components for readability in tests.
pub fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> chrono::DateTime<chrono::Utc> {
    let date = chrono::NaiveDate::from_ymd_opt(y, m, d).expect("invalid date");
    let naive = date
        .and_hms_opt(hh, mm, ss)
        .expect("invalid time components");
    chrono::DateTime::<chrono::Utc>::from_naive_utc_and_offset(naive, chrono::Utc)
}

/// Single-line order dated at `at`.
pub fn order(id: &str, email: &str, at: chrono::DateTime<chrono::Utc>, total: i64) -> OrderRecord {
    OrderRecord::new(id, email, Decimal::from(total))
        .at(at)
        .with_item(OrderItem::new("Widget", Decimal::from(total), 1))
}

/// Fixture snapshot by name.
pub fn dataset(name: &str) -> Vec<OrderRecord> {
    MockSource::orders(name).expect("known dataset")
}

/// Facade with default configuration and the static mock as source.
pub fn kassa_with_mock(dataset: &'static str) -> Kassa {
    Kassa::builder()
        .with_source(Arc::new(MockSource::with_dataset(dataset)))
        .build()
        .expect("valid default config")
}
