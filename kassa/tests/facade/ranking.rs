use kassa::{Decimal, Kassa};

use crate::helpers::dataset;

#[test]
fn top_customers_truncated() {
    let kassa = Kassa::builder().build().unwrap();
    let ranked = kassa.top_customers(&dataset("shop"), 3);
    let got: Vec<(&str, Decimal)> = ranked.iter().map(|c| (c.email.as_str(), c.total)).collect();
    assert_eq!(
        got,
        vec![
            ("ben@example.com", Decimal::new(19500, 2)),
            ("ana@example.com", Decimal::new(16500, 2)),
            ("cleo@example.com", Decimal::new(11000, 2)),
        ]
    );
    assert_eq!(ranked[1].order_count, 4);
}

#[test]
fn top_products_by_line_revenue() {
    let kassa = Kassa::builder().build().unwrap();
    let ranked = kassa.top_products(&dataset("shop"), 10);
    let got: Vec<(&str, Decimal, u64)> = ranked
        .iter()
        .map(|p| (p.title.as_str(), p.revenue, p.quantity_sold))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Lamp", Decimal::from(225), 5),
            ("Poster", Decimal::from(140), 7),
            ("Mug", Decimal::from(125), 10),
            ("Tote", Decimal::from(90), 6),
        ]
    );
}

#[test]
fn zero_limit_is_empty() {
    let kassa = Kassa::builder().build().unwrap();
    assert!(kassa.top_customers(&dataset("shop"), 0).is_empty());
}
