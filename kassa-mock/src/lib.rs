//! Mock order sources for CI-safe tests and demos.
//!
//! - [`MockSource`] serves one of a few deterministic fixture snapshots.
//! - [`DynamicMockSource`] defers every fetch to a [`DynamicMockController`],
//!   so tests can swap the collection, force failures or stall the source.
use std::time::Duration;

use async_trait::async_trait;
use kassa_core::{KassaError, OrderRecord, OrderSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use fixtures::orders::DATASETS;

/// Mock source for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Two dataset names are reserved: `"FAIL"` makes every fetch fail and
/// `"TIMEOUT"` delays every fetch by two seconds before failing.
pub struct MockSource {
    dataset: &'static str,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Serve the `shop` dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self { dataset: "shop" }
    }

    /// Serve a named dataset (see [`DATASETS`]).
    #[must_use]
    pub const fn with_dataset(dataset: &'static str) -> Self {
        Self { dataset }
    }

    /// Orders of a named dataset, without going through the async trait.
    #[must_use]
    pub fn orders(dataset: &str) -> Option<Vec<OrderRecord>> {
        fixtures::orders::by_name(dataset)
    }

    async fn maybe_fail_or_timeout(&self) -> Result<(), KassaError> {
        match self.dataset {
            "FAIL" => Err(KassaError::source_failed(
                self.name(),
                "forced failure: fetch_orders",
            )),
            "TIMEOUT" => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Err(KassaError::source_failed(self.name(), "stalled fetch gave up"))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl OrderSource for MockSource {
    fn name(&self) -> &'static str {
        "kassa-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, KassaError> {
        self.maybe_fail_or_timeout().await?;
        Self::orders(self.dataset)
            .ok_or_else(|| KassaError::not_found(format!("dataset {}", self.dataset)))
    }
}
