//! Values produced by the engine: buckets, forecasts, breakdowns and the
//! report envelopes assembled by the facade.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::selector::{Granularity, Metric, RelativePeriod};

/// One time interval's worth of aggregated order metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Display key, e.g. `2024-01-07`, `2024-1`, `Q1-2024`, `2024`.
    pub key: String,
    /// Local calendar date on which the bucket starts; series are ordered by it.
    pub start: NaiveDate,
    /// Sum of order totals.
    pub revenue: Decimal,
    /// Number of orders.
    pub order_count: u64,
    /// Number of distinct customer emails.
    pub customer_count: u64,
}

impl Bucket {
    /// Value of `metric` as a float, for trend fitting and charting.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue.to_f64().unwrap_or_default(),
            #[allow(clippy::cast_precision_loss)]
            Metric::OrderCount => self.order_count as f64,
            #[allow(clippy::cast_precision_loss)]
            Metric::CustomerCount => self.customer_count as f64,
        }
    }
}

/// Buckets in ascending order of [`Bucket::start`].
pub type Series = Vec<Bucket>;

/// One projected future value.
///
/// `value` comes straight from an unconstrained linear model and may be
/// negative; clamping is up to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// `Forecast 1`, `Forecast 2`, ...
    pub label: String,
    /// Projected metric value.
    pub value: f64,
}

/// Advisory raised when the first forecast point exceeds a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAlert {
    /// Metric that was forecast.
    pub metric: Metric,
    /// Value of the first forecast point.
    pub value: f64,
    /// Threshold that was exceeded.
    pub threshold: f64,
    /// Human-readable advisory.
    pub message: String,
}

/// Forecast of a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricForecast {
    /// Metric that was forecast.
    pub metric: Metric,
    /// Projected points; empty when the history is too short to fit a trend.
    pub points: Vec<ForecastPoint>,
}

/// Revenue, order count and distinct customers over some set of orders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of order totals.
    pub revenue: Decimal,
    /// Number of orders.
    pub order_count: u64,
    /// Number of distinct customer emails.
    pub customer_count: u64,
}

/// [`Totals`] restricted to one relative period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Period the totals were computed for.
    pub period: RelativePeriod,
    /// Totals over orders inside the period.
    pub totals: Totals,
}

/// Lifetime spend of one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTotals {
    /// Customer email.
    pub email: String,
    /// Sum of order totals.
    pub total: Decimal,
    /// Number of orders.
    pub order_count: u64,
}

/// Sales of one product title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTotals {
    /// Product title.
    pub title: String,
    /// Sum of `price * quantity` over all lines.
    pub revenue: Decimal,
    /// Units sold.
    pub quantity_sold: u64,
}

/// Dashboard tiles plus their per-period breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Totals over the whole snapshot, dated or not.
    pub totals: Totals,
    /// One entry per [`RelativePeriod`], in `RelativePeriod::ALL` order.
    pub breakdown: Vec<PeriodTotals>,
}

/// Historical series with forecasts for every metric and the threshold alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Granularity of `historical`.
    pub granularity: Granularity,
    /// Aggregated history the forecasts were fitted on.
    pub historical: Series,
    /// One forecast per metric, in `Metric::ALL` order.
    pub forecasts: Vec<MetricForecast>,
    /// Alert raised by this computation, if any.
    pub alert: Option<ForecastAlert>,
}

impl InsightsReport {
    /// Forecast for `metric`, if present.
    #[must_use]
    pub fn forecast(&self, metric: Metric) -> Option<&MetricForecast> {
        self.forecasts.iter().find(|f| f.metric == metric)
    }
}
