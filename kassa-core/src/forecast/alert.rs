use kassa_types::{ForecastAlert, ForecastPoint, Metric};

/// Evaluate the threshold rule over a forecast of `metric`.
///
/// Only the first point is inspected; the rule fires when its value is
/// strictly above `threshold`. Nothing is remembered between calls: callers
/// that display alerts own any de-duplication.
///
/// ```
/// use kassa_core::{check_threshold, ForecastPoint, Metric};
///
/// let points = vec![
///     ForecastPoint { label: "Forecast 1".into(), value: 12_000.0 },
///     ForecastPoint { label: "Forecast 2".into(), value: 9_000.0 },
/// ];
/// let alert = check_threshold(&points, Metric::Revenue, 10_000.0).unwrap();
/// assert_eq!(alert.value, 12_000.0);
/// assert!(check_threshold(&points[1..], Metric::Revenue, 10_000.0).is_none());
/// ```
#[must_use]
pub fn check_threshold(
    points: &[ForecastPoint],
    metric: Metric,
    threshold: f64,
) -> Option<ForecastAlert> {
    let first = points.first()?;
    if first.value <= threshold || first.value.is_nan() {
        return None;
    }
    #[cfg(feature = "tracing")]
    tracing::info!(
        metric = %metric,
        value = first.value,
        threshold,
        "forecast threshold exceeded"
    );
    Some(ForecastAlert {
        metric,
        value: first.value,
        threshold,
        message: format!(
            "{} is forecast to exceed {threshold} next period ({}: {:.2})",
            metric.label(),
            first.label,
            first.value
        ),
    })
}
