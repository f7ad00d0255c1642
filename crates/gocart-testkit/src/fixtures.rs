//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use gocart::{CartConfig, CartHandle, CartProvider};
use gocart_core::{Product, ProductId};
use gocart_store::{KvStore, MemoryKv};

/// A test fixture with a memory-backed cart provider.
///
/// Construction is async because the cart spawns its mirror writer task
/// and therefore needs a running Tokio runtime.
pub struct TestFixture {
    pub provider: CartProvider<MemoryKv>,
}

impl TestFixture {
    /// Create a fixture over an empty memory store.
    pub async fn new() -> Self {
        Self {
            provider: CartProvider::new(MemoryKv::new(), CartConfig::default()),
        }
    }

    /// Create a fixture whose store is pre-seeded with a mirror blob,
    /// rehydrated before the fixture is returned.
    pub async fn with_mirror(blob: &str) -> Self {
        let kv = MemoryKv::new();
        kv.set(gocart::DEFAULT_CART_KEY, blob)
            .await
            .expect("memory store set cannot fail");

        Self {
            provider: CartProvider::mounted(kv, CartConfig::default())
                .await
                .expect("seeded mirror is well-formed"),
        }
    }

    /// Hand out a consumer handle.
    pub fn handle(&self) -> CartHandle<MemoryKv> {
        self.provider.handle()
    }

    /// Read the current mirror blob, if one has been written.
    pub async fn mirror(&self) -> Option<String> {
        self.provider
            .cart()
            .store()
            .get(gocart::DEFAULT_CART_KEY)
            .await
            .expect("memory store get cannot fail")
    }

    /// Build a product with deterministic fields derived from its id.
    pub fn product(id: &str) -> Product {
        Product {
            id: ProductId::from(id),
            title: format!("Product {}", id),
            image_url: format!("https://img.test/{}.png", id),
            price: 9.99,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_round_trip() {
        let fixture = TestFixture::new().await;
        let cart = fixture.handle();

        cart.add_to_cart(TestFixture::product("1"));
        cart.flush().await;

        assert!(fixture.mirror().await.is_some());
    }

    #[tokio::test]
    async fn test_fixture_with_mirror() {
        let fixture = TestFixture::with_mirror(
            r#"[{"id":"7","title":"T","image_url":"u","price":2,"quantity":5}]"#,
        )
        .await;

        let items = fixture.handle().products();
        assert_eq!(items[0].quantity, 5);
    }
}
