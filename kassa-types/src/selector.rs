//! Closed selector sets: bucket granularity, relative period, and metric.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KassaError;

/// Fixed-width time unit used to bucket a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per local calendar date.
    Daily,
    /// One bucket per week, weeks start on Sunday.
    Weekly,
    /// One bucket per calendar month.
    Monthly,
    /// One bucket per calendar quarter (Jan–Mar, Apr–Jun, ...).
    Quarterly,
    /// One bucket per calendar year.
    Yearly,
}

impl Granularity {
    /// Every granularity, finest first.
    pub const ALL: [Self; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = KassaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "quarterly" | "quarter" => Ok(Self::Quarterly),
            "yearly" | "year" => Ok(Self::Yearly),
            other => Err(KassaError::invalid_arg(format!(
                "unknown granularity: {other:?}"
            ))),
        }
    }
}

/// A period named relative to a reference instant ("this week", "this quarter").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativePeriod {
    /// Same local calendar date as the reference.
    Day,
    /// The Sunday-started week containing the reference.
    Week,
    /// Same calendar month and year.
    Month,
    /// Same calendar quarter and year.
    Quarter,
    /// Same calendar year.
    Year,
}

impl RelativePeriod {
    /// Every period in breakdown order.
    pub const ALL: [Self; 5] = [
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Granularity of the same width, used when drilling from a breakdown
    /// entry into a full series.
    #[must_use]
    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Day => Granularity::Daily,
            Self::Week => Granularity::Weekly,
            Self::Month => Granularity::Monthly,
            Self::Quarter => Granularity::Quarterly,
            Self::Year => Granularity::Yearly,
        }
    }
}

impl fmt::Display for RelativePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelativePeriod {
    type Err = KassaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "quarter" | "quarterly" => Ok(Self::Quarter),
            "year" | "yearly" => Ok(Self::Year),
            other => Err(KassaError::invalid_arg(format!(
                "unknown relative period: {other:?}"
            ))),
        }
    }
}

/// Numeric column of a [`Bucket`](crate::Bucket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Sum of order totals.
    Revenue,
    /// Number of orders.
    OrderCount,
    /// Number of distinct customer emails.
    CustomerCount,
}

impl Metric {
    /// Every metric in display order.
    pub const ALL: [Self; 3] = [Self::Revenue, Self::OrderCount, Self::CustomerCount];

    /// Canonical camelCase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::OrderCount => "orderCount",
            Self::CustomerCount => "customerCount",
        }
    }

    /// Human-readable label for charts and alerts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::OrderCount => "Orders",
            Self::CustomerCount => "Customers",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = KassaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Dashboard links use the short forms `orders` / `customers`.
        match s.trim() {
            "revenue" => Ok(Self::Revenue),
            "orderCount" | "order_count" | "orders" => Ok(Self::OrderCount),
            "customerCount" | "customer_count" | "customers" => Ok(Self::CustomerCount),
            other => Err(KassaError::invalid_arg(format!("unknown metric: {other:?}"))),
        }
    }
}
