//! KvStore trait: the abstract interface for durable key-value storage.
//!
//! This trait allows the cart to be storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;

use crate::error::Result;

/// The KvStore trait: async interface for string key-value persistence.
///
/// Values are opaque strings; the cart stores its mirror as a JSON blob
/// under a single namespaced key. All methods are async to support both
/// sync (SQLite behind a mutex) and natively async backends.
///
/// # Design Notes
///
/// - **Last write wins**: `set` on an existing key overwrites its value.
/// - **Absent is not an error**: `get` on a missing key returns `None`,
///   `remove` on a missing key succeeds.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Succeeds if the key is absent.
    async fn remove(&self, key: &str) -> Result<()>;
}
