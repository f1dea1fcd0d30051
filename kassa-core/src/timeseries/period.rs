use chrono::{DateTime, Datelike, Days, Utc};
use chrono_tz::Tz;
use kassa_types::{OrderRecord, PeriodTotals, RelativePeriod};

use super::bucket::{local_date, local_midnight_utc, quarter_index, week_start};
use crate::summary::totals;

/// Whether `ts` falls in the current `period` relative to `reference`.
///
/// Both instants are read on the local calendar of `tz`:
/// - `Day`: same local date.
/// - `Week`: `[week_start, week_start + 7 days)` where `week_start` is local
///   midnight of the Sunday on or before the reference date. A week that
///   straddles New Year is still one week.
/// - `Month`: same month of the same year.
/// - `Quarter`: same calendar quarter of the same year.
/// - `Year`: same year.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use kassa_core::{in_period, RelativePeriod};
///
/// let sunday = Utc.with_ymd_and_hms(2024, 12, 29, 0, 0, 0).unwrap();
/// let saturday = Utc.with_ymd_and_hms(2025, 1, 4, 23, 59, 59).unwrap();
/// assert!(in_period(sunday, saturday, RelativePeriod::Week, chrono_tz::UTC));
/// assert!(!in_period(sunday, saturday, RelativePeriod::Year, chrono_tz::UTC));
/// ```
#[must_use]
pub fn in_period(
    ts: DateTime<Utc>,
    reference: DateTime<Utc>,
    period: RelativePeriod,
    tz: Tz,
) -> bool {
    let date = local_date(ts, tz);
    let now = local_date(reference, tz);
    match period {
        RelativePeriod::Day => date == now,
        RelativePeriod::Week => {
            let first = week_start(now);
            let Some(next) = first.checked_add_days(Days::new(7)) else {
                return date >= first;
            };
            let lo = local_midnight_utc(first, tz);
            let hi = local_midnight_utc(next, tz);
            ts >= lo && ts < hi
        }
        RelativePeriod::Month => date.year() == now.year() && date.month() == now.month(),
        RelativePeriod::Quarter => {
            date.year() == now.year() && quarter_index(date.month()) == quarter_index(now.month())
        }
        RelativePeriod::Year => date.year() == now.year(),
    }
}

/// Revenue, order count and distinct customers over dated orders inside
/// `period` relative to `reference`.
#[must_use]
pub fn period_totals(
    orders: &[OrderRecord],
    reference: DateTime<Utc>,
    period: RelativePeriod,
    tz: Tz,
) -> PeriodTotals {
    let inside = orders.iter().filter(|o| {
        o.created_at
            .is_some_and(|ts| in_period(ts, reference, period, tz))
    });
    PeriodTotals {
        period,
        totals: totals(inside),
    }
}

/// [`period_totals`] for every period in `RelativePeriod::ALL` order.
#[must_use]
pub fn breakdown(orders: &[OrderRecord], reference: DateTime<Utc>, tz: Tz) -> Vec<PeriodTotals> {
    RelativePeriod::ALL
        .iter()
        .map(|&p| period_totals(orders, reference, p, tz))
        .collect()
}
