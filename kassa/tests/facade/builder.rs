use std::time::Duration;

use kassa::{
    AlertConfig, ForecastConfig, Granularity, Kassa, KassaConfig, KassaError, Metric, Tz,
};

#[test]
fn defaults() {
    let kassa = Kassa::builder().build().unwrap();
    let cfg = kassa.config();
    assert_eq!(cfg.timezone, Tz::UTC);
    assert_eq!(cfg.forecast.granularity, Granularity::Monthly);
    assert_eq!(cfg.forecast.horizon, 3);
    assert_eq!(cfg.forecast.alert.metric, Metric::Revenue);
    assert!((cfg.forecast.alert.threshold - 10_000.0).abs() < f64::EPSILON);
    assert_eq!(cfg.source_timeout, Duration::from_secs(5));
}

#[test]
fn modifiers_apply_after_config() {
    let base = KassaConfig {
        timezone: Tz::Europe__Berlin,
        forecast: ForecastConfig {
            granularity: Granularity::Weekly,
            horizon: 8,
            alert: AlertConfig {
                metric: Metric::OrderCount,
                threshold: 50.0,
            },
        },
        source_timeout: Duration::from_secs(1),
    };
    let kassa = Kassa::builder()
        .config(base)
        .forecast_horizon(2)
        .alert_metric(Metric::CustomerCount)
        .build()
        .unwrap();
    let cfg = kassa.config();
    assert_eq!(cfg.timezone, Tz::Europe__Berlin);
    assert_eq!(cfg.forecast.granularity, Granularity::Weekly);
    assert_eq!(cfg.forecast.horizon, 2);
    assert_eq!(cfg.forecast.alert.metric, Metric::CustomerCount);
    assert!((cfg.forecast.alert.threshold - 50.0).abs() < f64::EPSILON);
}

#[test]
fn invalid_settings_are_rejected() {
    let err = Kassa::builder().forecast_horizon(0).build().err().unwrap();
    assert!(matches!(err, KassaError::InvalidArg(_)));
    assert!(err.is_actionable());

    let err = Kassa::builder().alert_threshold(f64::NAN).build().err().unwrap();
    assert!(matches!(err, KassaError::InvalidArg(_)));
}

#[test]
fn selectors_parse_from_strings() {
    assert_eq!("monthly".parse::<Granularity>().unwrap(), Granularity::Monthly);
    assert!(matches!(
        "fortnightly".parse::<Granularity>(),
        Err(KassaError::InvalidArg(_))
    ));
    assert_eq!("orders".parse::<Metric>().unwrap(), Metric::OrderCount);
}
