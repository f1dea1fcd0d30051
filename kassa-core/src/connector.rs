use async_trait::async_trait;

use kassa_types::{KassaError, OrderRecord};

/// Data-access seam: anything that can materialize the current order
/// collection as an immutable snapshot.
///
/// The engine never calls this itself; callers fetch a snapshot and pass the
/// slice in. Implementations may poll, subscribe, or batch-refresh, as long
/// as each call returns the collection as it is *now*: repeated calls are
/// expected to observe changes.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// A stable identifier used in logs and errors (e.g. "kassa-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly backend description.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the full order collection.
    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, KassaError>;
}
