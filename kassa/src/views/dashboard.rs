use chrono::{DateTime, Utc};
use kassa_core::{DashboardReport, OrderRecord, PeriodTotals, RelativePeriod, Totals};

use crate::Kassa;

impl Kassa {
    /// Revenue, order count and distinct customers over the whole snapshot.
    ///
    /// Undated orders are included.
    #[must_use]
    pub fn totals(&self, orders: &[OrderRecord]) -> Totals {
        kassa_core::totals(orders)
    }

    /// Totals over orders inside the relative `period` containing `now`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::dashboard::period_totals",
            skip(self, orders),
            fields(period = %period, orders = orders.len()),
        )
    )]
    #[must_use]
    pub fn period_totals(
        &self,
        orders: &[OrderRecord],
        now: DateTime<Utc>,
        period: RelativePeriod,
    ) -> PeriodTotals {
        kassa_core::period_totals(orders, now, period, self.cfg.timezone)
    }

    /// Totals for today, this week, this month, this quarter and this year.
    ///
    /// The periods are nested, so each entry's figures are at least those of
    /// the entry before it.
    #[must_use]
    pub fn breakdown(&self, orders: &[OrderRecord], now: DateTime<Utc>) -> Vec<PeriodTotals> {
        kassa_core::breakdown(orders, now, self.cfg.timezone)
    }

    /// Snapshot totals plus the five-period breakdown.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::dashboard::dashboard",
            skip(self, orders),
            fields(orders = orders.len()),
        )
    )]
    #[must_use]
    pub fn dashboard(&self, orders: &[OrderRecord], now: DateTime<Utc>) -> DashboardReport {
        DashboardReport {
            totals: self.totals(orders),
            breakdown: self.breakdown(orders, now),
        }
    }
}
