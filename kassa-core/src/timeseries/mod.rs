//! Time-based aggregation over order snapshots.
//!
//! Modules include:
//! - `bucket`: bucket start dates and display keys per granularity
//! - `aggregate`: group orders into a chronological series
//! - `period`: relative-period membership and per-period totals
/// Series aggregation.
pub mod aggregate;
/// Bucket boundaries, keys and local-calendar helpers.
pub mod bucket;
/// Relative-period classification and breakdowns.
pub mod period;
