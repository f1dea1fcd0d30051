//! Bucket boundaries and keys for each granularity.
//!
//! Everything is computed on the *local* calendar of the configured time
//! zone: an instant is first converted to a local date, the date is floored
//! to the start of its bucket, and the key is rendered from that start date.
//! Keys are therefore a pure function of the start date, which is what
//! series are ordered by.

use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use kassa_types::Granularity;

const DAY: i64 = 86_400;

/// Local calendar date of `ts` in `tz`.
#[must_use]
pub fn local_date(ts: DateTime<Utc>, tz: Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}

/// Sunday on or before `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Zero-based quarter index (0..=3) of a 1-based month.
#[must_use]
pub const fn quarter_index(month: u32) -> u32 {
    (month - 1) / 3
}

/// First local date of the bucket containing `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use kassa_core::timeseries::bucket::bucket_start;
/// use kassa_core::Granularity;
///
/// let d = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(); // a Thursday
/// assert_eq!(bucket_start(d, Granularity::Weekly), NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
/// assert_eq!(bucket_start(d, Granularity::Quarterly), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
#[must_use]
pub fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    let first_of = |month: u32| NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date);
    match granularity {
        Granularity::Daily => date,
        Granularity::Weekly => week_start(date),
        Granularity::Monthly => first_of(date.month()),
        Granularity::Quarterly => first_of(quarter_index(date.month()) * 3 + 1),
        Granularity::Yearly => first_of(1),
    }
}

/// Display key of the bucket starting on `start`.
///
/// - daily / weekly: `YYYY-MM-DD` of the (week) start date
/// - monthly: `<year>-<1-based month>` without padding, e.g. `2024-1`
/// - quarterly: `Q<1-4>-<year>`
/// - yearly: four-digit year
#[must_use]
pub fn bucket_key(start: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Daily | Granularity::Weekly => start.format("%Y-%m-%d").to_string(),
        Granularity::Monthly => format!("{}-{}", start.year(), start.month()),
        Granularity::Quarterly => {
            format!("Q{}-{}", quarter_index(start.month()) + 1, start.year())
        }
        Granularity::Yearly => format!("{:04}", start.year()),
    }
}

/// UTC instant of local midnight at the start of `date` in `tz`.
///
/// Around DST transitions the earliest valid mapping is used. Where midnight
/// does not exist locally (zones that spring forward at 00:00) the first
/// valid instant of the day is found by probing forward hour by hour; the UTC
/// day start is the last resort.
#[must_use]
pub fn local_midnight_utc(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    for hour in 0..3 {
        let Some(naive) = date.and_hms_opt(hour, 0, 0) else {
            continue;
        };
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => {}
        }
    }
    let day = NaiveDate::from_ymd_opt(1970, 1, 1)
        .map_or(0, |epoch| date.signed_duration_since(epoch).num_days());
    DateTime::from_timestamp(day * DAY, 0).unwrap_or_default()
}
