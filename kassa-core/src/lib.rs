//! kassa-core
//!
//! The order metrics engine shared across the kassa workspace.
//!
//! - `types`: the data model (orders, selectors, buckets, reports).
//! - `timeseries`: bucket orders into chronological series and classify
//!   instants into relative periods.
//! - `forecast`: least-squares linear trend projection and the threshold alert.
//! - `summary` / `ranking`: snapshot totals and customer/product leaderboards.
//! - `connector`: the `OrderSource` trait implemented by data-access layers.
//!
//! Purity
//! ------
//! Every engine function takes an immutable snapshot and returns freshly
//! built values. Nothing here performs I/O, holds state between calls, or
//! mutates its input, so all of it is safe to call from many threads at
//! once. The only async surface is [`OrderSource`], which belongs to the
//! caller's data-access layer rather than to the engine.
//!
#![warn(missing_docs)]

/// The `OrderSource` trait for snapshot providers.
pub mod connector;
/// Linear-trend forecasting and threshold alerts.
pub mod forecast;
/// Customer and product rankings.
pub mod ranking;
/// Snapshot-wide totals.
pub mod summary;
/// Bucketing and relative-period classification.
pub mod timeseries;
pub mod types;

pub use connector::OrderSource;
pub use forecast::alert::check_threshold;
pub use forecast::linear::LinearTrend;
pub use forecast::{forecast, forecast_values};
pub use ranking::{top_customers, top_products};
pub use summary::totals;
pub use timeseries::aggregate::{aggregate, aggregate_in_period};
pub use timeseries::bucket::{bucket_key, bucket_start, local_midnight_utc};
pub use timeseries::period::{breakdown, in_period, period_totals};
pub use types::*;
