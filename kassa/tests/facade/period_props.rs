use kassa::{Decimal, Granularity, Kassa, OrderRecord, RelativePeriod};
use proptest::prelude::*;

use crate::helpers::{dt, order};

fn arb_period() -> impl Strategy<Value = RelativePeriod> {
    prop::sample::select(RelativePeriod::ALL.to_vec())
}

fn arb_orders() -> impl Strategy<Value = Vec<OrderRecord>> {
    // instants between 2023-12-01 and 2025-02-28, hourly resolution
    let start = dt(2023, 12, 1, 0, 0, 0).timestamp();
    prop::collection::vec((0i64..(456 * 24), 1i64..500, 0u8..6), 0..40).prop_map(move |rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (hour, total, customer))| {
                let at = chrono::DateTime::from_timestamp(start + hour * 3600, 0).unwrap();
                order(&format!("o{i}"), &format!("c{customer}@example.com"), at, total)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn period_granularity_gives_at_most_one_bucket(
        orders in arb_orders(),
        period in arb_period(),
        now_hour in 0i64..(456 * 24),
    ) {
        let kassa = Kassa::builder().build().unwrap();
        let now = dt(2023, 12, 1, 0, 0, 0) + chrono::Duration::hours(now_hour);
        let series = kassa.series_in_period(&orders, period.granularity(), now, period);
        prop_assert!(series.len() <= 1);

        let totals = kassa.period_totals(&orders, now, period).totals;
        let revenue: Decimal = series.iter().map(|b| b.revenue).sum();
        let count: u64 = series.iter().map(|b| b.order_count).sum();
        prop_assert_eq!(revenue, totals.revenue);
        prop_assert_eq!(count, totals.order_count);
    }
}

#[test]
fn week_across_new_year_splits_wider_buckets() {
    let kassa = Kassa::builder().build().unwrap();
    let orders = vec![
        order("a", "a@example.com", dt(2024, 12, 30, 10, 0, 0), 10),
        order("b", "b@example.com", dt(2025, 1, 2, 10, 0, 0), 20),
    ];
    let now = dt(2025, 1, 2, 12, 0, 0);

    let weekly = kassa.series_in_period(&orders, Granularity::Weekly, now, RelativePeriod::Week);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].key, "2024-12-29");

    let monthly = kassa.series_in_period(&orders, Granularity::Monthly, now, RelativePeriod::Week);
    let keys: Vec<&str> = monthly.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["2024-12", "2025-1"]);

    let yearly = kassa.series_in_period(&orders, Granularity::Yearly, now, RelativePeriod::Week);
    let keys: Vec<&str> = yearly.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["2024", "2025"]);
}
