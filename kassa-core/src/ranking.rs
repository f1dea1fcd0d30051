//! Customer and product leaderboards over a snapshot.

use std::collections::HashMap;

use kassa_types::{CustomerTotals, OrderRecord, ProductTotals};
use rust_decimal::Decimal;

/// Spend and order count per customer email, highest spend first.
///
/// Orders with an empty email cannot be attributed and are skipped. Ties are
/// broken by email so the ranking is deterministic. Timestamps are ignored.
#[must_use]
pub fn top_customers(orders: &[OrderRecord]) -> Vec<CustomerTotals> {
    let mut by_email: HashMap<&str, (Decimal, u64)> = HashMap::new();
    for order in orders.iter().filter(|o| !o.email.is_empty()) {
        let entry = by_email.entry(order.email.as_str()).or_default();
        entry.0 += order.total;
        entry.1 += 1;
    }
    let mut out: Vec<CustomerTotals> = by_email
        .into_iter()
        .map(|(email, (total, order_count))| CustomerTotals {
            email: email.to_string(),
            total,
            order_count,
        })
        .collect();
    out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.email.cmp(&b.email)));
    out
}

/// Revenue (`price * quantity`) and units sold per product title, highest
/// revenue first.
///
/// Line items are summed independently of the order `total`. Ties are broken
/// by title. Timestamps are ignored.
#[must_use]
pub fn top_products(orders: &[OrderRecord]) -> Vec<ProductTotals> {
    let mut by_title: HashMap<&str, (Decimal, u64)> = HashMap::new();
    for item in orders.iter().flat_map(|o| o.items.iter()) {
        let entry = by_title.entry(item.title.as_str()).or_default();
        entry.0 += item.line_total();
        entry.1 += u64::from(item.quantity);
    }
    let mut out: Vec<ProductTotals> = by_title
        .into_iter()
        .map(|(title, (revenue, quantity_sold))| ProductTotals {
            title: title.to_string(),
            revenue,
            quantity_sold,
        })
        .collect();
    out.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.title.cmp(&b.title))
    });
    out
}
