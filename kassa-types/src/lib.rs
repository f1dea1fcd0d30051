//! Kassa-specific data model, selectors, report envelopes and configuration.
#![warn(missing_docs)]

mod config;
mod error;
mod order;
mod reports;
mod selector;

pub use config::{AlertConfig, ForecastConfig, KassaConfig};
pub use error::KassaError;
pub use order::{OrderItem, OrderRecord, parse_timestamp};
pub use reports::{
    Bucket, CustomerTotals, DashboardReport, ForecastAlert, ForecastPoint, InsightsReport,
    MetricForecast, PeriodTotals, ProductTotals, Series, Totals,
};
pub use selector::{Granularity, Metric, RelativePeriod};
