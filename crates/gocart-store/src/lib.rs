//! # gocart store
//!
//! Storage abstraction for gocart. Provides a trait-based interface for
//! durable key-value persistence with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The store module abstracts persistence behind the [`KvStore`] trait,
//! allowing the cart to be storage-agnostic. The primary implementation
//! is [`SqliteKv`], with [`MemoryKv`] for testing.
//!
//! ## Key Types
//!
//! - [`KvStore`] - The async trait for key-value operations
//! - [`SqliteKv`] - SQLite-based persistent storage
//! - [`MemoryKv`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gocart_store::{KvStore, SqliteKv};
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteKv::open("cart.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteKv::open_memory().unwrap();
//!
//!     store.set("gocart:cart", "[]").await.unwrap();
//!     let blob = store.get("gocart:cart").await.unwrap();
//!     assert_eq!(blob.as_deref(), Some("[]"));
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Last write wins**: `set` overwrites; there is no compare-and-swap
//! - **Absent is not an error**: missing keys read as `None`
//! - **Versioned schema**: migrations tracked in `schema_migrations`

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryKv;
pub use sqlite::SqliteKv;
pub use traits::KvStore;
