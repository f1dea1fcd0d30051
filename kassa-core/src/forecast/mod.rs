//! Linear-trend projection of a series and the threshold alert evaluated on it.
/// First-point threshold rule.
pub mod alert;
/// Ordinary least-squares trend over index vs. value.
pub mod linear;

use kassa_types::{Bucket, ForecastPoint, KassaError, Metric};

use linear::LinearTrend;

/// Project `horizon` future points of a raw value sequence.
///
/// Point `k` (1-based) is labelled `Forecast k` and sits at index
/// `values.len() + k - 1` on the fitted line. Fewer than two values cannot
/// define a trend and yield an empty forecast.
///
/// # Errors
/// Returns `Err(KassaError::InvalidArg)` if `horizon` is zero.
pub fn forecast_values(values: &[f64], horizon: usize) -> Result<Vec<ForecastPoint>, KassaError> {
    if horizon == 0 {
        return Err(KassaError::invalid_arg("forecast horizon must be at least 1"));
    }
    let Some(trend) = LinearTrend::fit(values) else {
        return Ok(Vec::new());
    };
    let n = values.len();
    #[allow(clippy::cast_precision_loss)]
    let points = (n..n + horizon)
        .map(|j| ForecastPoint {
            label: format!("Forecast {}", j - n + 1),
            value: trend.at(j as f64),
        })
        .collect();
    Ok(points)
}

/// Project `horizon` future values of `metric` from a series.
///
/// The series is taken in order; bucket `i` is placed at `x = i` regardless
/// of gaps between bucket start dates.
///
/// ```
/// use chrono::NaiveDate;
/// use kassa_core::{forecast, Bucket, Metric};
/// use rust_decimal::Decimal;
///
/// let series: Vec<Bucket> = (0..6)
///     .map(|i| Bucket {
///         key: format!("2024-{}", i + 1),
///         start: NaiveDate::from_ymd_opt(2024, i + 1, 1).unwrap(),
///         revenue: Decimal::from(100 + 50 * i),
///         order_count: 1,
///         customer_count: 1,
///     })
///     .collect();
/// let points = forecast(&series, Metric::Revenue, 3).unwrap();
/// assert_eq!(points[0].label, "Forecast 1");
/// assert!((points[0].value - 400.0).abs() < 1e-9);
/// ```
///
/// # Errors
/// Returns `Err(KassaError::InvalidArg)` if `horizon` is zero.
pub fn forecast(
    series: &[Bucket],
    metric: Metric,
    horizon: usize,
) -> Result<Vec<ForecastPoint>, KassaError> {
    let values: Vec<f64> = series.iter().map(|b| b.value(metric)).collect();
    forecast_values(&values, horizon)
}
