//! Invariant validation for loaded cart states.
//!
//! The reducer maintains the invariants by construction; this module
//! exists for the load path, where the mirror blob may have been written
//! by an older build or corrupted on disk.

use crate::error::ValidationError;
use crate::types::CartItem;
use std::collections::HashSet;

/// Check a materialized item list against the cart invariants.
///
/// - every quantity must be at least 1
/// - no two items may share a product id
///
/// Returns the first violation found, in item order.
pub fn validate_items(items: &[CartItem]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if item.quantity == 0 {
            return Err(ValidationError::ZeroQuantity {
                id: item.id.clone(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: item.id.clone(),
            });
        }
    }

    Ok(())
}
