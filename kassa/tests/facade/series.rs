use kassa::{Decimal, Granularity, Kassa, RelativePeriod};

use crate::helpers::{dataset, dt};

#[test]
fn shop_monthly_series() {
    let kassa = Kassa::builder().build().unwrap();
    let series = kassa.series(&dataset("shop"), Granularity::Monthly);
    let keys: Vec<&str> = series.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["2024-1", "2024-2", "2024-3", "2024-4", "2024-5", "2024-6"]);
    let revenue: Vec<Decimal> = series.iter().map(|b| b.revenue).collect();
    let expected: Vec<Decimal> = [4500, 10250, 13000, 8500, 7500, 12250]
        .into_iter()
        .map(|c| Decimal::new(c, 2))
        .collect();
    assert_eq!(revenue, expected);
}

#[test]
fn shop_quarterly_series() {
    let kassa = Kassa::builder().build().unwrap();
    let series = kassa.series(&dataset("shop"), Granularity::Quarterly);
    let got: Vec<(&str, Decimal, u64)> = series
        .iter()
        .map(|b| (b.key.as_str(), b.revenue, b.order_count))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Q1-2024", Decimal::new(27750, 2), 6),
            ("Q2-2024", Decimal::new(28250, 2), 6),
        ]
    );
}

#[test]
fn scenario_matches_reference_buckets() {
    let kassa = Kassa::builder().build().unwrap();
    let series = kassa.series(&dataset("scenario"), Granularity::Monthly);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].key, "2024-1");
    assert_eq!(series[0].revenue, Decimal::from(300));
    assert_eq!((series[0].order_count, series[0].customer_count), (2, 2));
    assert_eq!(series[1].key, "2024-2");
    assert_eq!(series[1].revenue, Decimal::from(150));
    assert_eq!((series[1].order_count, series[1].customer_count), (1, 1));
}

#[test]
fn daily_drill_down_for_this_month() {
    let kassa = Kassa::builder().build().unwrap();
    let series = kassa.series_in_period(
        &dataset("shop"),
        Granularity::Daily,
        dt(2024, 6, 12, 20, 0, 0),
        RelativePeriod::Month,
    );
    let keys: Vec<&str> = series.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["2024-06-03", "2024-06-12"]);
}
