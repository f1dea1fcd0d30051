use std::sync::Arc;
use std::time::Duration;

use kassa_core::{
    Granularity, KassaConfig, KassaError, Metric, OrderRecord, OrderSource, Tz,
};

/// Facade that owns the metrics configuration and an optional order source.
pub struct Kassa {
    pub(crate) source: Option<Arc<dyn OrderSource>>,
    pub(crate) cfg: KassaConfig,
}

/// Builder for constructing a `Kassa` facade with custom configuration.
pub struct KassaBuilder {
    source: Option<Arc<dyn OrderSource>>,
    cfg: KassaConfig,
}

impl Default for KassaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KassaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts without an order source. The pure views work on any slice you
    ///   pass in; only [`Kassa::snapshot`] needs a source.
    /// - Defaults: UTC calendar, monthly insights with a 3-step horizon, a
    ///   revenue alert above 10000, and a 5s source timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: KassaConfig::default(),
        }
    }

    /// Register the order source used by [`Kassa::snapshot`].
    ///
    /// Registering a second source replaces the first.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn OrderSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration at once.
    ///
    /// Later modifiers still apply on top of it.
    #[must_use]
    pub fn config(mut self, cfg: KassaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Time zone in which calendar days, weeks, months, quarters and years
    /// are computed.
    ///
    /// Behavior and trade-offs:
    /// - Affects bucket keys as well as period membership: an order placed at
    ///   23:30 local time belongs to the local day even if it is already the
    ///   next day in UTC.
    /// - Across DST transitions a calendar day spans 23 or 25 hours; bucket
    ///   boundaries follow local midnight.
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Granularity of the history the insights view is fitted on.
    #[must_use]
    pub const fn forecast_granularity(mut self, granularity: Granularity) -> Self {
        self.cfg.forecast.granularity = granularity;
        self
    }

    /// Number of future points projected by the insights and trend views.
    ///
    /// Zero is rejected by [`build`](Self::build).
    #[must_use]
    pub const fn forecast_horizon(mut self, horizon: usize) -> Self {
        self.cfg.forecast.horizon = horizon;
        self
    }

    /// Metric whose first forecast point is checked against the threshold.
    #[must_use]
    pub const fn alert_metric(mut self, metric: Metric) -> Self {
        self.cfg.forecast.alert.metric = metric;
        self
    }

    /// Threshold that the first forecast point must exceed to raise an alert.
    ///
    /// Non-finite values are rejected by [`build`](Self::build).
    #[must_use]
    pub const fn alert_threshold(mut self, threshold: f64) -> Self {
        self.cfg.forecast.alert.threshold = threshold;
        self
    }

    /// Set the timeout applied to each snapshot fetch.
    ///
    /// When exceeded, [`Kassa::snapshot`] returns `SourceTimeout` and the
    /// pending fetch is dropped.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Build the `Kassa` facade.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the forecast horizon is zero or the alert
    /// threshold is not a finite number.
    pub fn build(self) -> Result<Kassa, KassaError> {
        if self.cfg.forecast.horizon == 0 {
            return Err(KassaError::invalid_arg(
                "forecast horizon must be at least 1",
            ));
        }
        if !self.cfg.forecast.alert.threshold.is_finite() {
            return Err(KassaError::invalid_arg(format!(
                "alert threshold must be finite, got {}",
                self.cfg.forecast.alert.threshold
            )));
        }
        Ok(Kassa {
            source: self.source,
            cfg: self.cfg,
        })
    }
}

/// Attribute an error raised by a source to that source, keeping the kinds
/// that already identify the failure.
pub fn tag_err(source: &str, e: KassaError) -> KassaError {
    match e {
        e @ (KassaError::NotFound { .. }
        | KassaError::Source { .. }
        | KassaError::SourceTimeout { .. }) => e,
        other => KassaError::source_failed(source, other.to_string()),
    }
}

impl Kassa {
    /// Start building a new `Kassa` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let kassa = kassa::Kassa::builder()
    ///     .with_source(Arc::new(kassa_mock::MockSource::new()))
    ///     .forecast_horizon(6)
    ///     .source_timeout(Duration::from_secs(2))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> KassaBuilder {
        KassaBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &KassaConfig {
        &self.cfg
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, KassaError>
    where
        Fut: std::future::Future<Output = Result<T, KassaError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(KassaError::source_timeout(source_name)))
    }

    /// Fetch the current order collection from the configured source.
    ///
    /// Behavior and trade-offs:
    /// - Each call asks the source again; a changed collection yields fresh
    ///   results from every view computed over it.
    /// - The fetch is bounded by `source_timeout`.
    ///
    /// # Errors
    /// - `NotFound` if no source was registered.
    /// - `SourceTimeout` if the source did not answer in time.
    /// - `Source` for any other failure reported by the source.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "kassa::core::snapshot", skip(self))
    )]
    pub async fn snapshot(&self) -> Result<Vec<OrderRecord>, KassaError> {
        let source = self
            .source
            .as_ref()
            .ok_or_else(|| KassaError::not_found("order source"))?;
        let name = source.name();
        let orders =
            Self::source_call_with_timeout(name, self.cfg.source_timeout, source.fetch_orders())
                .await
                .map_err(|e| tag_err(name, e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(source = name, orders = orders.len(), "fetched order snapshot");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_err_keeps_source_kinds() {
        let e = tag_err("shop", KassaError::source_timeout("shop"));
        assert_eq!(e, KassaError::source_timeout("shop"));
        let e = tag_err("shop", KassaError::not_found("orders"));
        assert_eq!(e, KassaError::not_found("orders"));
    }

    #[test]
    fn tag_err_wraps_other_kinds() {
        let e = tag_err("shop", KassaError::Data("bad payload".into()));
        match e {
            KassaError::Source { name, msg } => {
                assert_eq!(name, "shop");
                assert!(msg.contains("bad payload"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn build_rejects_zero_horizon() {
        let err = KassaBuilder::new().forecast_horizon(0).build().err();
        assert!(matches!(err, Some(KassaError::InvalidArg(_))));
    }

    #[test]
    fn build_rejects_non_finite_threshold() {
        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = KassaBuilder::new().alert_threshold(t).build().err();
            assert!(matches!(err, Some(KassaError::InvalidArg(_))));
        }
    }
}
