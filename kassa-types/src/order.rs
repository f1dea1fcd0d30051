//! Order records as materialized from the document store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product title; rankings group by it verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Unit price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    /// Number of units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
}

impl OrderItem {
    /// Construct a new line item.
    pub fn new(title: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            title: title.into(),
            price,
            quantity,
        }
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Read-only order record.
///
/// Missing or `null` fields read as their defaults (empty email, zero total,
/// no items).
/// `total` is trusted as given: it is expected to equal the sum of the line
/// totals but the engine never recomputes or checks it. Records whose
/// `created_at` is missing or unparseable keep `created_at == None` and are
/// left out of every time-based aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Document identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Customer email; distinct values define distinct customers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Order total in the shop currency.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: Decimal,
    /// Line items.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    /// Creation instant, if the store provided a usable one.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderRecord {
    /// Construct an undated order without line items.
    pub fn new(id: impl Into<String>, email: impl Into<String>, total: Decimal) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            total,
            items: vec![],
            created_at: None,
        }
    }

    /// Set the creation instant.
    #[must_use]
    pub fn at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Append a line item.
    #[must_use]
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }
}

/// Shapes the store has been seen to emit for `createdAt`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Seconds(i64),
    Store {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
    Unknown(serde::de::IgnoredAny),
}

impl RawTimestamp {
    fn resolve(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Text(s) => parse_timestamp(&s),
            Self::Seconds(secs) => DateTime::from_timestamp(secs, 0),
            Self::Store {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(seconds, nanoseconds),
            Self::Unknown(_) => None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(raw.and_then(RawTimestamp::resolve))
}

/// Parse a textual timestamp the way `createdAt` strings are read.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DD HH:MM:SS` (taken as UTC), or a bare
/// `YYYY-MM-DD` date (midnight UTC). Anything else yields `None`.
///
/// ```
/// use kassa_types::parse_timestamp;
///
/// assert!(parse_timestamp("2024-01-05T10:00:00+02:00").is_some());
/// assert!(parse_timestamp("2024-01-05").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
