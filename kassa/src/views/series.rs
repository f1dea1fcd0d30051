use chrono::{DateTime, Utc};
use kassa_core::{Granularity, OrderRecord, RelativePeriod, Series};

use crate::Kassa;

impl Kassa {
    /// Bucket `orders` into a chronological series at `granularity`.
    ///
    /// Behavior: buckets are ordered by their start date in the configured
    /// time zone; periods without orders are absent rather than zero-filled.
    /// Undated orders are skipped.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::series::series",
            skip(self, orders),
            fields(granularity = %granularity, orders = orders.len()),
        )
    )]
    #[must_use]
    pub fn series(&self, orders: &[OrderRecord], granularity: Granularity) -> Series {
        kassa_core::aggregate(orders, granularity, self.cfg.timezone)
    }

    /// Like [`series`](Self::series) but restricted to orders in the
    /// relative `period` containing `now`.
    ///
    /// Trade-offs: combining a fine granularity with a wide period (daily
    /// buckets for this month, say) gives the drill-down chart. With
    /// `period.granularity()` this yields at most one bucket; a wider
    /// granularity can still yield two when this week straddles a month or
    /// year boundary.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::series::series_in_period",
            skip(self, orders),
            fields(granularity = %granularity, period = %period, orders = orders.len()),
        )
    )]
    #[must_use]
    pub fn series_in_period(
        &self,
        orders: &[OrderRecord],
        granularity: Granularity,
        now: DateTime<Utc>,
        period: RelativePeriod,
    ) -> Series {
        kassa_core::aggregate_in_period(orders, granularity, self.cfg.timezone, now, period)
    }
}
