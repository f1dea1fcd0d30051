//! Configuration types for the metrics facade.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::selector::{Granularity, Metric};

/// Threshold rule evaluated over the first forecast point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Metric whose forecast is checked.
    pub metric: Metric,
    /// The alert fires when the first forecast point is strictly above this value.
    pub threshold: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Revenue,
            threshold: 10_000.0,
        }
    }
}

/// Settings for the insights view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Granularity of the history the trend is fitted on.
    pub granularity: Granularity,
    /// Number of future points to project (>= 1).
    pub horizon: usize,
    /// Threshold rule over the first projected point.
    pub alert: AlertConfig,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Monthly,
            horizon: 3,
            alert: AlertConfig::default(),
        }
    }
}

/// Global configuration for the `Kassa` facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KassaConfig {
    /// Time zone whose calendar defines days, weeks, months, quarters and years.
    pub timezone: Tz,
    /// Forecast and alert settings.
    pub forecast: ForecastConfig,
    /// Upper bound on a single snapshot fetch from the order source.
    pub source_timeout: Duration,
}

impl Default for KassaConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            forecast: ForecastConfig::default(),
            source_timeout: Duration::from_secs(5),
        }
    }
}
