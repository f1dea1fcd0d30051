use kassa_core::{
    Granularity, InsightsReport, KassaError, Metric, MetricForecast, OrderRecord,
};

use crate::Kassa;

impl Kassa {
    /// Project `metric` over the configured forecast granularity and horizon.
    ///
    /// Behavior: the history is the chronological series at
    /// `forecast.granularity`; fewer than two buckets yield no points.
    ///
    /// # Errors
    /// Returns `InvalidArg` only if the horizon is zero, which
    /// [`KassaBuilder::build`](crate::KassaBuilder::build) already rejects.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::insights::forecast",
            skip(self, orders),
            fields(metric = %metric, orders = orders.len()),
        )
    )]
    pub fn forecast(
        &self,
        orders: &[OrderRecord],
        metric: Metric,
    ) -> Result<MetricForecast, KassaError> {
        let history = self.series(orders, self.cfg.forecast.granularity);
        let points = kassa_core::forecast(&history, metric, self.cfg.forecast.horizon)?;
        Ok(MetricForecast { metric, points })
    }

    /// Revenue projection at an arbitrary `granularity`.
    ///
    /// Trade-offs: finer granularities give the fit more points but also more
    /// noise; the projection horizon is counted in buckets of `granularity`.
    ///
    /// # Errors
    /// Same as [`forecast`](Self::forecast).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::insights::revenue_trend",
            skip(self, orders),
            fields(granularity = %granularity, orders = orders.len()),
        )
    )]
    pub fn revenue_trend(
        &self,
        orders: &[OrderRecord],
        granularity: Granularity,
    ) -> Result<MetricForecast, KassaError> {
        let history = self.series(orders, granularity);
        let points = kassa_core::forecast(&history, Metric::Revenue, self.cfg.forecast.horizon)?;
        Ok(MetricForecast {
            metric: Metric::Revenue,
            points,
        })
    }

    /// Historical series, forecasts for every metric and the threshold alert.
    ///
    /// Behavior:
    /// - The history is bucketed once and every metric is projected from it.
    /// - The alert inspects only the first projected point of the alert metric
    ///   and is recomputed on every call; repeated calls over the same
    ///   snapshot raise the same alert again.
    ///
    /// # Errors
    /// Same as [`forecast`](Self::forecast).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kassa::insights::insights",
            skip(self, orders),
            fields(orders = orders.len()),
        )
    )]
    pub fn insights(&self, orders: &[OrderRecord]) -> Result<InsightsReport, KassaError> {
        let fc = &self.cfg.forecast;
        let historical = self.series(orders, fc.granularity);
        let forecasts = Metric::ALL
            .iter()
            .map(|&metric| {
                kassa_core::forecast(&historical, metric, fc.horizon)
                    .map(|points| MetricForecast { metric, points })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let alert = forecasts
            .iter()
            .find(|f| f.metric == fc.alert.metric)
            .and_then(|f| kassa_core::check_threshold(&f.points, f.metric, fc.alert.threshold));
        Ok(InsightsReport {
            granularity: fc.granularity,
            historical,
            forecasts,
            alert,
        })
    }
}
