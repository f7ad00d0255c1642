//! Error types for the core crate.

use crate::types::ProductId;
use thiserror::Error;

/// A cart invariant violation found while validating loaded items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An item carries quantity 0; reachable states never do.
    #[error("item {id} has quantity 0")]
    ZeroQuantity { id: ProductId },

    /// Two items share the same product id.
    #[error("duplicate item id {id}")]
    DuplicateId { id: ProductId },
}
