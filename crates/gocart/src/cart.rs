//! The CartStore: the in-memory cart plus its write-through mirror.
//!
//! Transitions mutate the in-memory state synchronously; the matching
//! full-state mirror write is enqueued on a single spawned writer task
//! and never awaited by the caller. Routing every write through one
//! queue means snapshots reach storage in issuance order, so the mirror
//! can lag the in-memory state but never regress past an older snapshot.

use std::sync::{Arc, RwLock};

use gocart_core::{validate_items, CartItem, CartState, Product, ProductId};
use gocart_store::KvStore;
use tokio::sync::{mpsc, oneshot};

use crate::error::Result;

/// Default storage key for the persisted mirror.
pub const DEFAULT_CART_KEY: &str = "gocart:cart";

/// Configuration for the CartStore.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key the mirror blob is stored under.
    pub storage_key: String,
    /// Whether to validate the mirror on load and discard it on failure.
    ///
    /// When false, a parse failure propagates to the caller and a
    /// parseable blob replaces the state wholesale with no invariant
    /// check.
    pub validate_on_load: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            validate_on_load: true,
        }
    }
}

/// Result of rehydrating the cart from the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The mirror was read and replaced the state; carries the item count.
    Loaded(usize),
    /// No mirror exists; the cart stays empty.
    Empty,
    /// The mirror was malformed or invalid and was discarded.
    Discarded,
}

/// A job for the mirror writer task.
enum WriteJob {
    /// Persist this full-state snapshot.
    Mirror(String),
    /// Acknowledge once every previously enqueued write has completed.
    Flush(oneshot::Sender<()>),
}

/// The main CartStore struct.
///
/// Holds the authoritative in-memory cart and keeps a best-effort
/// persisted mirror in sync with every transition. Reads always come
/// from memory; persistence is fire-and-forget.
///
/// Requires a Tokio runtime: construction spawns the mirror writer task.
pub struct CartStore<S: KvStore + 'static> {
    /// The in-memory cart, authoritative for all reads.
    state: RwLock<CartState>,
    /// The storage backend.
    store: Arc<S>,
    /// Sender feeding the single mirror writer task.
    writer: mpsc::UnboundedSender<WriteJob>,
    /// Configuration.
    config: CartConfig,
}

impl<S: KvStore + 'static> CartStore<S> {
    /// Create a new cart over the given storage backend.
    ///
    /// The cart starts empty; call [`load`](Self::load) to rehydrate
    /// from the mirror.
    pub fn new(store: S, config: CartConfig) -> Self {
        let store = Arc::new(store);
        let (writer, jobs) = mpsc::unbounded_channel();
        spawn_writer(Arc::clone(&store), config.storage_key.clone(), jobs);

        Self {
            state: RwLock::new(CartState::new()),
            store,
            writer,
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rehydration
    // ─────────────────────────────────────────────────────────────────────────

    /// Rehydrate the cart from the persisted mirror.
    ///
    /// Runs once at mount, before the cart is considered ready; until it
    /// resolves the state is provisional (empty). An absent mirror leaves
    /// the cart empty. With `validate_on_load` (the default) a blob that
    /// fails to parse or violates an invariant is discarded with a
    /// warning and the cart starts empty; otherwise parse failures
    /// propagate and parseable blobs are taken as-is.
    pub async fn load(&self) -> Result<LoadOutcome> {
        let Some(blob) = self.store.get(&self.config.storage_key).await? else {
            return Ok(LoadOutcome::Empty);
        };

        let items = match self.decode(&blob) {
            Ok(items) => items,
            Err(err) if self.config.validate_on_load => {
                tracing::warn!(error = %err, "discarding invalid cart mirror");
                return Ok(LoadOutcome::Discarded);
            }
            Err(err) => return Err(err),
        };

        let count = items.len();
        *self.state.write().unwrap() = CartState::from_items(items);
        tracing::debug!(items = count, "cart rehydrated from mirror");
        Ok(LoadOutcome::Loaded(count))
    }

    /// Decode a mirror blob, validating invariants when configured.
    fn decode(&self, blob: &str) -> Result<Vec<CartItem>> {
        let items: Vec<CartItem> = serde_json::from_str(blob)?;
        if self.config.validate_on_load {
            validate_items(&items)?;
        }
        Ok(items)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a product to the cart.
    ///
    /// Adding an id already in the cart increments it; the incoming
    /// title, price, and image are discarded in favor of the stored
    /// item. Otherwise the product joins the cart at quantity 1.
    pub fn add_to_cart(&self, product: Product) {
        self.apply(|state| state.add(product));
    }

    /// Increase the quantity of the item with this id by one.
    ///
    /// A missing id is a silent no-op.
    pub fn increment(&self, id: &ProductId) {
        self.apply(|state| state.increment(id));
    }

    /// Decrease the quantity of the item with this id, removing it when
    /// it would drop below 1.
    ///
    /// A missing id is a silent no-op.
    pub fn decrement(&self, id: &ProductId) {
        self.apply(|state| state.decrement(id));
    }

    /// Read-only snapshot of the current items.
    pub fn products(&self) -> Vec<CartItem> {
        self.state.read().unwrap().items().to_vec()
    }

    /// Apply a transition and enqueue the matching mirror write.
    ///
    /// The snapshot is serialized while the write lock is held, so
    /// queued snapshots are exactly the sequence of states the cart
    /// passed through. Every call enqueues a write, including no-op
    /// transitions; writes are never coalesced.
    fn apply<F: FnOnce(&mut CartState)>(&self, transition: F) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            transition(&mut state);
            serde_json::to_string(state.items()).expect("cart items serialize to JSON")
        };

        if self.writer.send(WriteJob::Mirror(snapshot)).is_err() {
            tracing::warn!("mirror writer task is gone; dropping cart write");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence control
    // ─────────────────────────────────────────────────────────────────────────

    /// Wait until every previously enqueued mirror write has completed.
    ///
    /// Ordinary callers never await persistence; this exists for orderly
    /// shutdown and for tests that assert on the mirror.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.writer.send(WriteJob::Flush(ack)).is_ok() {
            let _ = done.await;
        }
    }
}

/// Spawn the single mirror writer task.
///
/// Consumes jobs in issuance order; a failed write is logged and
/// dropped. The task ends when the owning CartStore is dropped.
fn spawn_writer<S: KvStore + 'static>(
    store: Arc<S>,
    key: String,
    mut jobs: mpsc::UnboundedReceiver<WriteJob>,
) {
    tokio::spawn(async move {
        while let Some(job) = jobs.recv().await {
            match job {
                WriteJob::Mirror(snapshot) => {
                    if let Err(err) = store.set(&key, &snapshot).await {
                        tracing::warn!(error = %err, "cart mirror write failed");
                    }
                }
                WriteJob::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }
    });
}
