//! # gocart testkit
//!
//! Testing utilities for gocart.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for products, items, and
//!   operation sequences
//! - **Fixtures**: Helper structs for setting up cart test scenarios
//! - **Golden vectors**: Known mirror blobs with expected decoded states
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gocart_core::CartState;
//! use gocart_testkit::generators::{op_sequence, CartOp};
//!
//! proptest! {
//!     #[test]
//!     fn ids_stay_unique(ops in op_sequence(64)) {
//!         let mut state = CartState::new();
//!         for op in ops {
//!             match op {
//!                 CartOp::Add(p) => state.add(p),
//!                 CartOp::Increment(id) => state.increment(&id),
//!                 CartOp::Decrement(id) => state.decrement(&id),
//!             }
//!         }
//!         // assert invariants...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up a memory-backed cart:
//!
//! ```rust,ignore
//! use gocart_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new().await;
//! let cart = fixture.handle();
//! cart.add_to_cart(TestFixture::product("sku-1"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::CartOp;
pub use vectors::{all_vectors, MirrorVector};
