use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use kassa_types::{Bucket, Granularity, OrderRecord, RelativePeriod, Series};
use rust_decimal::Decimal;

use super::bucket::{bucket_key, bucket_start, local_date};
use super::period::in_period;

#[derive(Default)]
struct BucketAgg<'a> {
    revenue: Decimal,
    order_count: u64,
    customers: HashSet<&'a str>,
}

impl BucketAgg<'_> {
    fn finalize(self, start: NaiveDate, granularity: Granularity) -> Bucket {
        Bucket {
            key: bucket_key(start, granularity),
            start,
            revenue: self.revenue,
            order_count: self.order_count,
            customer_count: self.customers.len() as u64,
        }
    }
}

/// Generic aggregator: groups dated orders accepted by `keep` into buckets of
/// `granularity` on the local calendar of `tz`.
fn aggregate_by<'a, I, F>(orders: I, granularity: Granularity, tz: Tz, keep: F) -> Series
where
    I: IntoIterator<Item = &'a OrderRecord>,
    F: Fn(DateTime<Utc>) -> bool,
{
    let mut buckets: BTreeMap<NaiveDate, BucketAgg<'a>> = BTreeMap::new();
    #[cfg(feature = "tracing")]
    let mut undated: usize = 0;

    for order in orders {
        let Some(ts) = order.created_at else {
            #[cfg(feature = "tracing")]
            {
                undated += 1;
            }
            continue;
        };
        if !keep(ts) {
            continue;
        }
        let start = bucket_start(local_date(ts, tz), granularity);
        let agg = buckets.entry(start).or_default();
        agg.revenue += order.total;
        agg.order_count += 1;
        agg.customers.insert(order.email.as_str());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        granularity = %granularity,
        buckets = buckets.len(),
        undated,
        "aggregated orders"
    );

    // BTreeMap iteration is ascending by start date, which is the series order.
    buckets
        .into_iter()
        .map(|(start, agg)| agg.finalize(start, granularity))
        .collect()
}

/// Bucket orders into a chronological series at `granularity`.
///
/// - Orders without `created_at` are skipped silently.
/// - Each dated order lands in exactly one bucket, chosen on the local
///   calendar of `tz` (weeks start on Sunday, quarters are calendar quarters).
/// - Per bucket: `revenue` sums `total`, `order_count` counts orders and
///   `customer_count` counts distinct `email` values.
/// - Buckets are ordered by their start date, never by their key text, so
///   `2024-9` precedes `2024-10` and `Q4-2024` precedes `Q1-2025`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use kassa_core::{aggregate, Granularity, OrderRecord};
/// use rust_decimal::Decimal;
///
/// let at = |m, d| Utc.with_ymd_and_hms(2024, m, d, 12, 0, 0).unwrap();
/// let orders = vec![
///     OrderRecord::new("1", "a@x.com", Decimal::from(100)).at(at(1, 5)),
///     OrderRecord::new("2", "b@x.com", Decimal::from(200)).at(at(1, 20)),
///     OrderRecord::new("3", "a@x.com", Decimal::from(150)).at(at(2, 10)),
/// ];
/// let series = aggregate(&orders, Granularity::Monthly, chrono_tz::UTC);
/// let keys: Vec<&str> = series.iter().map(|b| b.key.as_str()).collect();
/// assert_eq!(keys, ["2024-1", "2024-2"]);
/// assert_eq!(series[0].revenue, Decimal::from(300));
/// assert_eq!(series[0].customer_count, 2);
/// ```
#[must_use]
pub fn aggregate(orders: &[OrderRecord], granularity: Granularity, tz: Tz) -> Series {
    aggregate_by(orders, granularity, tz, |_| true)
}

/// Like [`aggregate`], restricted to orders that fall in `period` relative
/// to `reference` (see [`in_period`]).
///
/// With `period.granularity()` this yields at most one bucket: the current one.
#[must_use]
pub fn aggregate_in_period(
    orders: &[OrderRecord],
    granularity: Granularity,
    tz: Tz,
    reference: DateTime<Utc>,
    period: RelativePeriod,
) -> Series {
    aggregate_by(orders, granularity, tz, |ts| {
        in_period(ts, reference, period, tz)
    })
}
