//! Golden mirror vectors.
//!
//! Known mirror blobs with their expected decoded states. These pin the
//! wire format: field names, integer and fractional price notation, and
//! item order must keep decoding exactly as recorded here, or carts
//! persisted by earlier builds stop rehydrating.

use gocart_core::{CartItem, ProductId};

/// A single golden mirror vector.
#[derive(Debug, Clone)]
pub struct MirrorVector {
    pub name: &'static str,
    pub description: &'static str,
    /// The exact persisted blob.
    pub blob: &'static str,
    /// The state the blob must decode to.
    pub expected: Vec<CartItem>,
}

fn item(id: &str, title: &str, image_url: &str, price: f64, quantity: u32) -> CartItem {
    CartItem {
        id: ProductId::from(id),
        title: title.to_string(),
        image_url: image_url.to_string(),
        price,
        quantity,
    }
}

/// All golden mirror vectors.
pub fn all_vectors() -> Vec<MirrorVector> {
    vec![
        MirrorVector {
            name: "empty_cart",
            description: "A cart that was emptied writes a bare JSON array",
            blob: "[]",
            expected: vec![],
        },
        MirrorVector {
            name: "single_item_integer_price",
            description: "Prices written as JSON integers must decode",
            blob: r#"[{"id":"2","title":"X","image_url":"y","price":5,"quantity":3}]"#,
            expected: vec![item("2", "X", "y", 5.0, 3)],
        },
        MirrorVector {
            name: "multiple_items_in_add_order",
            description: "Item order in the blob is the cart's add order",
            blob: r#"[{"id":"sku-9","title":"Mug","image_url":"https://img.test/mug.png","price":12.5,"quantity":1},{"id":"sku-3","title":"Pen","image_url":"https://img.test/pen.png","price":1.25,"quantity":10}]"#,
            expected: vec![
                item("sku-9", "Mug", "https://img.test/mug.png", 12.5, 1),
                item("sku-3", "Pen", "https://img.test/pen.png", 1.25, 10),
            ],
        },
    ]
}
