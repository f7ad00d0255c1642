//! # gocart core
//!
//! Core primitives for the gocart shopping cart: strong types, the pure
//! cart reducer, and invariant validation. No async, no I/O.
//!
//! ## Key Types
//!
//! - [`ProductId`] - Stable, unique product identifier (newtype)
//! - [`Product`] - The add-to-cart input (no quantity)
//! - [`CartItem`] - A product reference plus a quantity; also the wire
//!   format of the persisted mirror (JSON array element)
//! - [`CartState`] - The ordered in-memory cart and its transitions
//!
//! ## Invariants
//!
//! A state built through the reducer always satisfies:
//!
//! - **Quantity floor**: every item has `quantity >= 1`
//! - **Id uniqueness**: no two items share a product id
//!
//! Loaded states are checked separately via [`validate_items`].

pub mod error;
pub mod state;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use state::CartState;
pub use types::{CartItem, Product, ProductId};
pub use validation::validate_items;
