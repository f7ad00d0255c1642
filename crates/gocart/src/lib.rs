//! # gocart
//!
//! An embeddable shopping cart: an ordered in-memory list of line items
//! keyed by product id, with a write-through JSON mirror in a local
//! key-value store so the cart survives process restarts.
//!
//! ## Key Concepts
//!
//! - **Authoritative memory**: reads always come from the in-memory
//!   state; transitions are synchronous and immediately visible.
//! - **Mirror**: the persisted snapshot, rewritten in full after every
//!   transition. A best-effort copy that can transiently lag.
//! - **Single-writer queue**: mirror writes flow through one spawned
//!   task, so snapshots land in issuance order.
//! - **Scoped sharing**: one [`CartProvider`] owns the cart; consumers
//!   get cloneable [`CartHandle`]s, never ambient globals.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gocart::{CartConfig, CartProvider};
//! use gocart::core::{Product, ProductId};
//! use gocart::store::SqliteKv;
//!
//! async fn example() {
//!     let kv = SqliteKv::open("cart.db").unwrap();
//!     let provider = CartProvider::mounted(kv, CartConfig::default())
//!         .await
//!         .unwrap();
//!
//!     let cart = provider.handle();
//!     cart.add_to_cart(Product {
//!         id: ProductId::from("sku-1"),
//!         title: "Keyboard".to_string(),
//!         image_url: "https://img.example/kb.png".to_string(),
//!         price: 49.9,
//!     });
//!     cart.increment(&ProductId::from("sku-1"));
//!
//!     assert_eq!(cart.products()[0].quantity, 2);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `gocart::core` - Domain types and the pure cart reducer
//! - `gocart::store` - Key-value storage abstraction and SQLite

pub mod cart;
pub mod error;
pub mod provider;

// Re-export component crates
pub use gocart_core as core;
pub use gocart_store as store;

// Re-export main types for convenience
pub use cart::{CartConfig, CartStore, LoadOutcome, DEFAULT_CART_KEY};
pub use error::{CartError, Result};
pub use provider::{CartHandle, CartProvider};

// Re-export commonly used core types
pub use gocart_core::{CartItem, CartState, Product, ProductId};
