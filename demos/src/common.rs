use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use kassa_core::{KassaError, OrderRecord, OrderSource};

/// Set to any value to run the demos against the deterministic mock.
pub const USE_MOCK_ENV: &str = "KASSA_DEMOS_USE_MOCK";
/// Path to a JSON array of order documents to run the demos against.
pub const ORDERS_FILE_ENV: &str = "KASSA_ORDERS_FILE";

/// Order source backed by a JSON export of the order collection.
///
/// The file is re-read on every fetch, so editing it between snapshots is
/// picked up.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Read orders from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OrderSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn vendor(&self) -> &'static str {
        "JSON export"
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, KassaError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| KassaError::source_failed(self.name(), format!("{}: {e}", self.path.display())))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

fn use_mock() -> bool {
    std::env::var(USE_MOCK_ENV).is_ok() || std::env::var(ORDERS_FILE_ENV).is_err()
}

/// Return an order source for demos.
///
/// Uses the mock `dataset` when `KASSA_DEMOS_USE_MOCK` is set or no
/// `KASSA_ORDERS_FILE` is given, otherwise the JSON file.
#[must_use]
pub fn get_source(dataset: &'static str) -> Arc<dyn OrderSource> {
    match std::env::var(ORDERS_FILE_ENV) {
        Ok(path) if !use_mock() => Arc::new(JsonFileSource::new(path)),
        _ => {
            println!("--- (Using Mock Source for CI: {dataset}) ---");
            Arc::new(kassa_mock::MockSource::with_dataset(dataset))
        }
    }
}

/// Reference instant for relative periods.
///
/// Mock fixtures are pinned to the first half of 2024, so the mock runs
/// pretend it is the evening of 2024-06-12 (UTC).
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    if use_mock() {
        Utc.with_ymd_and_hms(2024, 6, 12, 20, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    } else {
        Utc::now()
    }
}
