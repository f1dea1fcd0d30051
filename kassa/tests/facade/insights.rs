use kassa::{Granularity, Kassa, Metric};

use crate::helpers::dataset;

fn values(points: &[kassa::ForecastPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

fn assert_close(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len(), "{got:?} vs {expected:?}");
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-6, "{got:?} vs {expected:?}");
    }
}

#[test]
fn growth_raises_revenue_alert() {
    let kassa = Kassa::builder().build().unwrap();
    let report = kassa.insights(&dataset("growth")).unwrap();

    assert_eq!(report.granularity, Granularity::Monthly);
    assert_eq!(report.historical.len(), 5);
    let metrics: Vec<Metric> = report.forecasts.iter().map(|f| f.metric).collect();
    assert_eq!(metrics, Metric::ALL.to_vec());

    let revenue = report.forecast(Metric::Revenue).unwrap();
    assert_close(&values(&revenue.points), &[11_000.0, 12_000.0, 13_000.0]);
    let orders = report.forecast(Metric::OrderCount).unwrap();
    assert_close(&values(&orders.points), &[2.0, 2.0, 2.0]);

    let alert = report.alert.expect("revenue alert");
    assert_eq!(alert.metric, Metric::Revenue);
    assert!((alert.value - 11_000.0).abs() < 1e-6);
    assert!(alert.message.contains("Forecast 1"));
}

#[test]
fn alert_is_raised_again_on_every_call() {
    let kassa = Kassa::builder().build().unwrap();
    let orders = dataset("growth");
    let first = kassa.insights(&orders).unwrap().alert;
    let second = kassa.insights(&orders).unwrap().alert;
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn threshold_and_metric_are_configurable() {
    let high = Kassa::builder().alert_threshold(20_000.0).build().unwrap();
    assert!(high.insights(&dataset("growth")).unwrap().alert.is_none());

    let by_orders = Kassa::builder()
        .alert_metric(Metric::OrderCount)
        .alert_threshold(1.5)
        .build()
        .unwrap();
    let alert = by_orders.insights(&dataset("growth")).unwrap().alert.unwrap();
    assert_eq!(alert.metric, Metric::OrderCount);
}

#[test]
fn declining_history_projects_below_zero() {
    let kassa = Kassa::builder().build().unwrap();
    let fc = kassa.forecast(&dataset("scenario"), Metric::Revenue).unwrap();
    assert_close(&values(&fc.points), &[0.0, -150.0, -300.0]);
    assert!(kassa.insights(&dataset("scenario")).unwrap().alert.is_none());
}

#[test]
fn empty_history_has_no_forecast() {
    let kassa = Kassa::builder().build().unwrap();
    let report = kassa.insights(&dataset("empty")).unwrap();
    assert!(report.historical.is_empty());
    assert!(report.forecasts.iter().all(|f| f.points.is_empty()));
    assert!(report.alert.is_none());
}

#[test]
fn revenue_trend_at_other_granularity() {
    let kassa = Kassa::builder().forecast_horizon(2).build().unwrap();
    let trend = kassa
        .revenue_trend(&dataset("growth"), Granularity::Quarterly)
        .unwrap();
    assert_eq!(trend.metric, Metric::Revenue);
    assert_close(&values(&trend.points), &[17_000.0, 15_000.0]);
}
