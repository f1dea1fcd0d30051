use kassa_core::{OrderItem, OrderRecord, parse_timestamp};
use rust_decimal::Decimal;

/// Names accepted by [`by_name`].
pub const DATASETS: &[&str] = &["shop", "scenario", "growth", "empty"];

pub fn by_name(s: &str) -> Option<Vec<OrderRecord>> {
    match s {
        "shop" => Some(shop()),
        "scenario" => Some(scenario()),
        "growth" => Some(growth()),
        "empty" => Some(vec![]),
        _ => None,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn order(id: &str, email: &str, at: Option<&str>, items: &[(&str, &str, u32)]) -> OrderRecord {
    let items: Vec<OrderItem> = items
        .iter()
        .map(|&(title, price, qty)| OrderItem::new(title, dec(price), qty))
        .collect();
    let total = items.iter().map(OrderItem::line_total).sum();
    let mut out = OrderRecord::new(id, email, total);
    out.items = items;
    out.created_at = at.map(|ts| parse_timestamp(ts).unwrap());
    out
}

/// First half of 2024 for a small print shop, with one undated order and one
/// guest checkout without an email.
fn shop() -> Vec<OrderRecord> {
    vec![
        order("s01", "ana@example.com", Some("2024-01-04T10:15:00Z"), &[("Mug", "12.50", 2)]),
        order("s02", "ben@example.com", Some("2024-01-19T16:40:00Z"), &[("Poster", "20.00", 1)]),
        order(
            "s03",
            "ana@example.com",
            Some("2024-02-02T09:05:00Z"),
            &[("Lamp", "45.00", 1), ("Mug", "12.50", 1)],
        ),
        order("s04", "cleo@example.com", Some("2024-02-27T21:30:00Z"), &[("Tote", "15.00", 3)]),
        order("s05", "dev@example.com", Some("2024-03-11T12:00:00Z"), &[("Poster", "20.00", 2)]),
        order("s06", "ben@example.com", Some("2024-03-30T23:50:00Z"), &[("Lamp", "45.00", 2)]),
        order(
            "s07",
            "cleo@example.com",
            Some("2024-04-08T08:20:00Z"),
            &[("Mug", "12.50", 4), ("Tote", "15.00", 1)],
        ),
        order("s08", "", Some("2024-04-21T14:45:00Z"), &[("Poster", "20.00", 1)]),
        order("s09", "ana@example.com", Some("2024-05-06T11:10:00Z"), &[("Lamp", "45.00", 1)]),
        order("s10", "dev@example.com", Some("2024-05-24T18:05:00Z"), &[("Tote", "15.00", 2)]),
        order(
            "s11",
            "ben@example.com",
            Some("2024-06-03T07:55:00Z"),
            &[("Lamp", "45.00", 1), ("Poster", "20.00", 2)],
        ),
        order("s12", "ana@example.com", Some("2024-06-12T15:00:00Z"), &[("Mug", "12.50", 3)]),
        order("s13", "eve@example.com", None, &[("Poster", "20.00", 1)]),
    ]
}

/// Three orders across two months: January holds two customers and 300 in
/// revenue, February one customer and 150.
fn scenario() -> Vec<OrderRecord> {
    vec![
        order("o1", "a@example.com", Some("2024-01-05T00:00:00Z"), &[("Widget", "100", 1)]),
        order("o2", "b@example.com", Some("2024-01-20T00:00:00Z"), &[("Widget", "100", 2)]),
        order("o3", "a@example.com", Some("2024-02-03T00:00:00Z"), &[("Widget", "150", 1)]),
    ]
}

/// Monthly revenue climbing by 1000 from 6000 in January to 10000 in May
/// 2024, so the next month projects to 11000.
fn growth() -> Vec<OrderRecord> {
    let months = ["01", "02", "03", "04", "05"];
    let mut out = Vec::new();
    for (i, month) in months.iter().enumerate() {
        let half = (3000 + 500 * i).to_string();
        out.push(order(
            &format!("g{i}a"),
            "wholesale@example.com",
            Some(format!("2024-{month}-10T12:00:00Z").as_str()),
            &[("Pallet", half.as_str(), 1)],
        ));
        out.push(order(
            &format!("g{i}b"),
            &format!("retail{i}@example.com"),
            Some(format!("2024-{month}-20T12:00:00Z").as_str()),
            &[("Crate", half.as_str(), 1)],
        ));
    }
    out
}
