//! Error types for the cart.

use gocart_core::ValidationError;
use gocart_store::StoreError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// The in-memory transitions themselves are infallible; these errors
/// surface only from the load path and from storage.
#[derive(Debug, Error)]
pub enum CartError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Mirror blob serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Loaded items violate a cart invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
