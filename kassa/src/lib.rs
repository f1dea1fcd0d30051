//! Kassa turns a snapshot of shop orders into dashboard metrics.
//!
//! Overview
//! - Buckets orders into chronological daily, weekly, monthly, quarterly or
//!   yearly series in a configurable time zone.
//! - Classifies orders into the day, week, month, quarter and year containing
//!   a reference instant and totals each period.
//! - Projects a metric forward with an ordinary least-squares line and raises
//!   an advisory when the next point crosses a threshold.
//! - Ranks customers by spend and products by line revenue.
//!
//! Key behaviors and trade-offs
//! - Snapshots are explicit: every view takes the order slice it works on.
//!   [`Kassa::snapshot`] is the only async entry point and simply asks the
//!   configured [`OrderSource`] for the current collection, bounded by
//!   `source_timeout`. Call it again to see changes; there is no diff API.
//! - Calendar arithmetic happens in the configured time zone (UTC by
//!   default). Weeks start on Sunday; quarters are calendar quarters.
//! - Orders without a usable `createdAt` are left out of every time-based
//!   view but still count towards [`Kassa::totals`] and the rankings.
//! - Forecasts place buckets at consecutive indices regardless of gaps
//!   between their start dates. Values are unconstrained and can go negative.
//! - Alerts are recomputed on every call; nothing is remembered.
//!
//! Examples
//! Building a facade and computing the dashboard:
//! ```rust,ignore
//! use std::sync::Arc;
//! use kassa::Kassa;
//!
//! let kassa = Kassa::builder()
//!     .with_source(Arc::new(MyStore::connect()?))
//!     .timezone(chrono_tz::Europe::Berlin)
//!     .alert_threshold(25_000.0)
//!     .build()?;
//!
//! let orders = kassa.snapshot().await?;
//! let dashboard = kassa.dashboard(&orders, chrono::Utc::now());
//! let insights = kassa.insights(&orders)?;
//! if let Some(alert) = insights.alert {
//!     println!("{}", alert.message);
//! }
//! ```
//!
//! See the `kassa-demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod views;

pub use core::{Kassa, KassaBuilder};

pub use kassa_core::{AlertConfig, ForecastConfig, KassaConfig, OrderSource};

// Re-export core types for convenience
pub use kassa_core::{
    Bucket, CustomerTotals, DashboardReport, Decimal, ForecastAlert, ForecastPoint, Granularity,
    InsightsReport, KassaError, Metric, MetricForecast, OrderItem, OrderRecord, PeriodTotals,
    ProductTotals, RelativePeriod, Series, Totals, Tz,
};
