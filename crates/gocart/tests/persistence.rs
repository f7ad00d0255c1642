//! End-to-end persistence tests: rehydration across restarts, mirror
//! write ordering, and the discard-on-invalid load policy.

use std::sync::Mutex;

use gocart::core::{Product, ProductId};
use gocart::store::{KvStore, MemoryKv, SqliteKv};
use gocart::{CartConfig, CartProvider, CartStore, LoadOutcome, DEFAULT_CART_KEY};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// KvStore double that records every written snapshot in arrival order.
#[derive(Default)]
struct RecordingKv {
    writes: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl KvStore for RecordingKv {
    async fn get(&self, _key: &str) -> gocart::store::Result<Option<String>> {
        Ok(self.writes.lock().unwrap().last().cloned())
    }

    async fn set(&self, _key: &str, value: &str) -> gocart::store::Result<()> {
        self.writes.lock().unwrap().push(value.to_string());
        Ok(())
    }

    async fn remove(&self, _key: &str) -> gocart::store::Result<()> {
        self.writes.lock().unwrap().clear();
        Ok(())
    }
}

fn product(id: &str, title: &str, price: f64) -> Product {
    Product {
        id: ProductId::from(id),
        title: title.to_string(),
        image_url: format!("https://img.test/{}.png", id),
        price,
    }
}

#[tokio::test]
async fn rehydrates_stored_mirror() {
    init_tracing();

    let kv = MemoryKv::new();
    kv.set(
        DEFAULT_CART_KEY,
        r#"[{"id":"2","title":"X","image_url":"y","price":5,"quantity":3}]"#,
    )
    .await
    .unwrap();

    let cart = CartStore::new(kv, CartConfig::default());
    assert_eq!(cart.load().await.unwrap(), LoadOutcome::Loaded(1));

    let items = cart.products();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_str(), "2");
    assert_eq!(items[0].title, "X");
    assert_eq!(items[0].image_url, "y");
    assert_eq!(items[0].price, 5.0);
    assert_eq!(items[0].quantity, 3);
}

#[tokio::test]
async fn cart_survives_process_restart() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.db");

    let before = {
        let kv = SqliteKv::open(&path).unwrap();
        let provider = CartProvider::mounted(kv, CartConfig::default())
            .await
            .unwrap();
        let cart = provider.handle();

        cart.add_to_cart(product("sku-1", "Keyboard", 49.9));
        cart.add_to_cart(product("sku-2", "Mouse", 19.9));
        cart.increment(&ProductId::from("sku-1"));
        cart.flush().await;
        cart.products()
    };

    // "Restart": a fresh provider over the same database file.
    let kv = SqliteKv::open(&path).unwrap();
    let provider = CartProvider::mounted(kv, CartConfig::default())
        .await
        .unwrap();

    assert_eq!(provider.cart().products(), before);
}

#[tokio::test]
async fn mirror_writes_land_in_issuance_order() {
    init_tracing();

    let cart = CartStore::new(RecordingKv::default(), CartConfig::default());
    let mut passed_through = Vec::new();

    // Rapid back-to-back transitions, none awaited individually. Each one
    // changes the state, so every snapshot in the sequence is distinct
    // and any reordering of the writes would be visible.
    for i in 0..20 {
        cart.add_to_cart(product(&format!("sku-{}", i % 4), "item", 1.0));
        passed_through.push(serde_json::to_string(&cart.products()).unwrap());
    }
    cart.decrement(&ProductId::from("sku-0"));
    passed_through.push(serde_json::to_string(&cart.products()).unwrap());
    cart.decrement(&ProductId::from("sku-0"));
    passed_through.push(serde_json::to_string(&cart.products()).unwrap());
    cart.flush().await;

    // The mirror received exactly the sequence of states the cart passed
    // through, ending on the current one.
    let writes = cart.store().writes.lock().unwrap().clone();
    assert_eq!(writes, passed_through);
    let final_state: Vec<gocart::CartItem> =
        serde_json::from_str(writes.last().unwrap()).unwrap();
    assert_eq!(final_state, cart.products());
}

#[tokio::test]
async fn decrement_to_zero_removes_from_mirror_too() {
    init_tracing();

    let cart = CartStore::new(MemoryKv::new(), CartConfig::default());
    cart.add_to_cart(product("sku-1", "Keyboard", 49.9));
    cart.decrement(&ProductId::from("sku-1"));
    cart.flush().await;

    assert!(cart.products().is_empty());
    let blob = cart.store().get(DEFAULT_CART_KEY).await.unwrap().unwrap();
    assert_eq!(blob, "[]");
}

#[tokio::test]
async fn corrupt_mirror_is_discarded_and_overwritten() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.db");

    {
        let kv = SqliteKv::open(&path).unwrap();
        kv.set(DEFAULT_CART_KEY, "{truncated").await.unwrap();
    }

    let kv = SqliteKv::open(&path).unwrap();
    let cart = CartStore::new(kv, CartConfig::default());
    assert_eq!(cart.load().await.unwrap(), LoadOutcome::Discarded);
    assert!(cart.products().is_empty());

    // The next transition writes a clean mirror over the corrupt one.
    cart.add_to_cart(product("sku-1", "Keyboard", 49.9));
    cart.flush().await;

    let blob = cart.store().get(DEFAULT_CART_KEY).await.unwrap().unwrap();
    let mirrored: Vec<gocart::CartItem> = serde_json::from_str(&blob).unwrap();
    assert_eq!(mirrored.len(), 1);
}
