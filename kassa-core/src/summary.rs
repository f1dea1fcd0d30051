//! Snapshot-wide totals for the dashboard tiles.

use std::collections::HashSet;

use kassa_types::{OrderRecord, Totals};
use rust_decimal::Decimal;

/// Revenue, order count and distinct customer emails over `orders`.
///
/// Timestamps are ignored: undated orders count here even though they are
/// excluded from every time-based aggregation.
#[must_use]
pub fn totals<'a, I>(orders: I) -> Totals
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut revenue = Decimal::ZERO;
    let mut order_count: u64 = 0;
    let mut customers: HashSet<&'a str> = HashSet::new();
    for order in orders {
        revenue += order.total;
        order_count += 1;
        customers.insert(order.email.as_str());
    }
    Totals {
        revenue,
        order_count,
        customer_count: customers.len() as u64,
    }
}
