use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kassa_core::{KassaError, OrderRecord, OrderSource};

/// Instruction for how the next fetches should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(KassaError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

struct InternalState {
    behavior: MockBehavior<Vec<OrderRecord>>,
    fetches: usize,
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            behavior: MockBehavior::Return(vec![]),
            fetches: 0,
        }
    }
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `fetch_orders` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior<Vec<OrderRecord>>) {
        let mut guard = self.state.lock().await;
        guard.behavior = behavior;
    }

    /// Serve `orders` from now on.
    pub async fn set_orders(&self, orders: Vec<OrderRecord>) {
        self.set_behavior(MockBehavior::Return(orders)).await;
    }

    /// Append an order to the served collection.
    ///
    /// Returns `false` (and changes nothing) while the mock is set to fail or hang.
    pub async fn push_order(&self, order: OrderRecord) -> bool {
        let mut guard = self.state.lock().await;
        match &mut guard.behavior {
            MockBehavior::Return(orders) => {
                orders.push(order);
                true
            }
            MockBehavior::Fail(_) | MockBehavior::Hang => false,
        }
    }

    /// Number of `fetch_orders` calls observed so far, including failed ones.
    pub async fn fetch_count(&self) -> usize {
        self.state.lock().await.fetches
    }

    /// Reset to an empty collection and clear the fetch counter.
    pub async fn clear(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    ///
    /// The source starts out serving an empty collection.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn OrderSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn OrderSource>, controller)
    }
}

#[async_trait]
impl OrderSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, KassaError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.fetches += 1;
            guard.behavior.clone()
        };
        match behavior {
            MockBehavior::Return(orders) => Ok(orders),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}
