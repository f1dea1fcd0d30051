use kassa::{Decimal, Kassa, RelativePeriod, Tz};

use crate::helpers::{dataset, dt, order};

fn rev(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[test]
fn shop_dashboard_midweek_in_june() {
    let kassa = Kassa::builder().build().unwrap();
    let report = kassa.dashboard(&dataset("shop"), dt(2024, 6, 12, 20, 0, 0));

    // the undated order counts here but in no period
    assert_eq!(report.totals.revenue, rev(58000));
    assert_eq!(report.totals.order_count, 13);
    assert_eq!(report.totals.customer_count, 6);

    let periods: Vec<RelativePeriod> = report.breakdown.iter().map(|p| p.period).collect();
    assert_eq!(periods, RelativePeriod::ALL.to_vec());

    let figures: Vec<(Decimal, u64, u64)> = report
        .breakdown
        .iter()
        .map(|p| (p.totals.revenue, p.totals.order_count, p.totals.customer_count))
        .collect();
    assert_eq!(
        figures,
        vec![
            (rev(3750), 1, 1),
            (rev(3750), 1, 1),
            (rev(12250), 2, 2),
            (rev(28250), 6, 5),
            (rev(56000), 12, 5),
        ]
    );
}

#[test]
fn period_totals_follow_the_configured_zone() {
    let orders = vec![order("late", "a@example.com", dt(2024, 1, 31, 23, 30, 0), 10)];
    let now = dt(2024, 2, 1, 8, 0, 0);

    let utc = Kassa::builder().build().unwrap();
    assert_eq!(utc.period_totals(&orders, now, RelativePeriod::Month).totals.order_count, 0);

    // 00:30 on Feb 1 in Berlin
    let berlin = Kassa::builder().timezone(Tz::Europe__Berlin).build().unwrap();
    let t = berlin.period_totals(&orders, now, RelativePeriod::Month).totals;
    assert_eq!(t.order_count, 1);
    assert_eq!(t.revenue, Decimal::TEN);
    assert_eq!(berlin.period_totals(&orders, now, RelativePeriod::Day).totals.order_count, 1);
}

#[test]
fn empty_snapshot_has_zero_tiles() {
    let kassa = Kassa::builder().build().unwrap();
    let report = kassa.dashboard(&[], dt(2024, 6, 12, 0, 0, 0));
    assert_eq!(report.totals, kassa::Totals::default());
    assert!(report.breakdown.iter().all(|p| p.totals.order_count == 0));
}
