//! Re-export of foundational types from `kassa-types`.
// Consolidated re-exports so downstream crates can depend on `kassa-core` only

pub use kassa_types::{AlertConfig, ForecastConfig, KassaConfig, KassaError};

pub use kassa_types::{Granularity, Metric, RelativePeriod};

pub use kassa_types::{OrderItem, OrderRecord, parse_timestamp};

pub use kassa_types::{
    Bucket, CustomerTotals, DashboardReport, ForecastAlert, ForecastPoint, InsightsReport,
    MetricForecast, PeriodTotals, ProductTotals, Series, Totals,
};

pub use chrono_tz::Tz;
pub use rust_decimal::Decimal;
