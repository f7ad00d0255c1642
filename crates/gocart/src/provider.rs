//! Scoped sharing of one cart across many consumers.
//!
//! The provider owns the shared [`CartStore`]; consumers receive cheap
//! cloneable handles that borrow it for as long as the provider scope is
//! alive. Handles hold a weak reference on purpose: using one after the
//! provider is dropped is a programmer-contract violation and panics
//! immediately rather than returning a degraded cart. No ambient global
//! state is involved, so independent test runs never share a cart.

use std::sync::{Arc, Weak};

use gocart_core::{CartItem, Product, ProductId};
use gocart_store::KvStore;

use crate::cart::{CartConfig, CartStore};
use crate::error::Result;

/// Owns the shared cart for the lifetime of an application or session.
pub struct CartProvider<S: KvStore + 'static> {
    inner: Arc<CartStore<S>>,
}

impl<S: KvStore + 'static> CartProvider<S> {
    /// Create a provider around a fresh, empty cart.
    ///
    /// The cart is usable immediately but provisional until
    /// [`CartStore::load`] resolves.
    pub fn new(store: S, config: CartConfig) -> Self {
        Self {
            inner: Arc::new(CartStore::new(store, config)),
        }
    }

    /// Create a provider and rehydrate the cart from the mirror before
    /// returning it.
    pub async fn mounted(store: S, config: CartConfig) -> Result<Self> {
        let provider = Self::new(store, config);
        provider.inner.load().await?;
        Ok(provider)
    }

    /// Direct access to the owned cart.
    pub fn cart(&self) -> &CartStore<S> {
        &self.inner
    }

    /// Hand out a consumer handle tied to this provider's scope.
    pub fn handle(&self) -> CartHandle<S> {
        CartHandle {
            cart: Arc::downgrade(&self.inner),
        }
    }
}

/// The consumer-facing cart API, valid within an active provider scope.
///
/// Cloneable and cheap to pass around. Every method panics if the
/// provider has been dropped.
pub struct CartHandle<S: KvStore + 'static> {
    cart: Weak<CartStore<S>>,
}

impl<S: KvStore + 'static> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        Self {
            cart: Weak::clone(&self.cart),
        }
    }
}

impl<S: KvStore + 'static> CartHandle<S> {
    /// Read-only snapshot of the current items.
    pub fn products(&self) -> Vec<CartItem> {
        self.cart().products()
    }

    /// Add a product to the cart.
    pub fn add_to_cart(&self, product: Product) {
        self.cart().add_to_cart(product);
    }

    /// Increase the quantity of the item with this id by one.
    pub fn increment(&self, id: &ProductId) {
        self.cart().increment(id);
    }

    /// Decrease the quantity of the item with this id, removing it when
    /// it would drop below 1.
    pub fn decrement(&self, id: &ProductId) {
        self.cart().decrement(id);
    }

    /// Wait for all enqueued mirror writes to complete.
    pub async fn flush(&self) {
        self.cart().flush().await;
    }

    /// Upgrade to the shared cart, or fail loudly outside the scope.
    fn cart(&self) -> Arc<CartStore<S>> {
        self.cart
            .upgrade()
            .expect("cart handle used outside an active CartProvider scope")
    }
}
