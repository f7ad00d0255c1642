//! Strong type definitions for the cart domain.
//!
//! Product identifiers are newtypes to prevent misuse at compile time.
//! `CartItem` is a flat serde struct because it *is* the wire format:
//! the persisted mirror is a JSON array of these, fields exactly as named.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable, unique product identifier.
///
/// Opaque to the cart: two items are "the same product" exactly when
/// their ids compare equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ProductId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A product as offered by the catalog: the add-to-cart input.
///
/// Carries no quantity; adding a product to the cart always means
/// "one more of this".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// URL of the product image.
    pub image_url: String,
    /// Unit price. Stored as a plain JSON number on the wire.
    pub price: f64,
}

/// A cart line item: a product reference plus a quantity.
///
/// The unit of the cart's contents and of the persisted mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display title, frozen at first add.
    pub title: String,
    /// URL of the product image, frozen at first add.
    pub image_url: String,
    /// Unit price, frozen at first add.
    pub price: f64,
    /// Number of units in the cart. Never below 1 in a reducer-built state.
    pub quantity: u32,
}

impl CartItem {
    /// Build the quantity-1 line item for a freshly added product.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::from("sku-42");
        assert_eq!(format!("{}", id), "sku-42");
        assert_eq!(id.as_str(), "sku-42");
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let id = ProductId::from("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_cart_item_from_product() {
        let product = Product {
            id: ProductId::from("1"),
            title: "T".to_string(),
            image_url: "u".to_string(),
            price: 10.0,
        };
        let item = CartItem::from_product(product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id.as_str(), "1");
    }

    #[test]
    fn test_cart_item_wire_fields() {
        let item = CartItem {
            id: ProductId::from("2"),
            title: "X".to_string(),
            image_url: "y".to_string(),
            price: 5.0,
            quantity: 3,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["title"], "X");
        assert_eq!(value["image_url"], "y");
        assert_eq!(value["price"], 5.0);
        assert_eq!(value["quantity"], 3);
    }
}
