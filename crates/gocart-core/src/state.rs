//! The cart reducer: an ordered list of line items keyed by product id.
//!
//! All three transitions are pure, synchronous, and infallible. A state
//! built exclusively through them upholds two invariants:
//!
//! - every item has `quantity >= 1` (decrementing at the floor removes
//!   the item instead of leaving a zero-quantity entry)
//! - no two items share a product id (adding an existing id increments)
//!
//! States loaded from the mirror are only as clean as validation makes
//! them; the transitions tolerate duplicate ids by applying to every
//! matching item.

use crate::types::{CartItem, Product, ProductId};

/// The in-memory cart: an ordered sequence of line items.
///
/// Insertion order reflects add order; increment and decrement never
/// reorder items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from already-materialized items (the load path).
    ///
    /// Performs no validation; see [`crate::validation::validate_items`].
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Read-only view of the current items.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the state, yielding the items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Number of distinct line items (not total quantity).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same id already exists this is exactly
    /// `increment(id)`: the incoming title, price, and image are
    /// discarded in favor of the stored item. Otherwise the product is
    /// appended as a new quantity-1 line item.
    pub fn add(&mut self, product: Product) {
        if self.items.iter().any(|item| item.id == product.id) {
            self.increment(&product.id);
            return;
        }
        self.items.push(CartItem::from_product(product));
    }

    /// Increase the quantity of every item matching `id` by one.
    ///
    /// A missing id is a silent no-op. Saturates at `u32::MAX`: there is
    /// no upper quantity limit, so there is no overflow panic either.
    pub fn increment(&mut self, id: &ProductId) {
        for item in self.items.iter_mut().filter(|item| &item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of the item matching `id`, removing it at
    /// the floor.
    ///
    /// If an item with this id exists at `quantity > 1`, its quantity
    /// drops by exactly one. Otherwise (id absent, or present only at
    /// quantity 1) every item with this id is removed. A missing id is
    /// a silent no-op.
    pub fn decrement(&mut self, id: &ProductId) {
        let above_floor = self
            .items
            .iter_mut()
            .find(|item| &item.id == id && item.quantity > 1);

        match above_floor {
            Some(item) => item.quantity -= 1,
            None => self.items.retain(|item| &item.id != id),
        }
    }
}
