//! Proptest generators for property-based testing.

use proptest::prelude::*;

use gocart_core::{CartItem, Product, ProductId};

/// Generate a product id drawn from a small alphabet, so operation
/// sequences collide on ids often enough to exercise the interesting
/// transitions.
pub fn product_id() -> impl Strategy<Value = ProductId> {
    "[a-h]".prop_map(|s| ProductId::from(s.as_str()))
}

/// Generate a product title.
pub fn title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,23}".prop_map(String::from)
}

/// Generate an image URL.
pub fn image_url() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_map(|slug| format!("https://img.test/{}.png", slug))
}

/// Generate a non-negative price with two-decimal granularity.
pub fn price() -> impl Strategy<Value = f64> {
    (0u32..=1_000_000).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Generate a random product.
pub fn product() -> impl Strategy<Value = Product> {
    (product_id(), title(), image_url(), price()).prop_map(|(id, title, image_url, price)| {
        Product {
            id,
            title,
            image_url,
            price,
        }
    })
}

/// Generate a well-formed cart item (quantity at least 1).
pub fn cart_item() -> impl Strategy<Value = CartItem> {
    (product(), 1u32..=50).prop_map(|(product, quantity)| CartItem {
        quantity,
        ..CartItem::from_product(product)
    })
}

/// A single cart transition, for generated operation sequences.
#[derive(Debug, Clone)]
pub enum CartOp {
    Add(Product),
    Increment(ProductId),
    Decrement(ProductId),
}

/// Generate a random cart transition.
pub fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        product().prop_map(CartOp::Add),
        product_id().prop_map(CartOp::Increment),
        product_id().prop_map(CartOp::Decrement),
    ]
}

/// Generate a sequence of transitions of up to `max_len` operations.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(cart_op(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocart_core::validate_items;

    proptest! {
        #[test]
        fn generated_items_are_individually_valid(item in cart_item()) {
            prop_assert!(item.quantity >= 1);
            prop_assert!(validate_items(std::slice::from_ref(&item)).is_ok());
        }

        #[test]
        fn generated_prices_are_finite(product in product()) {
            prop_assert!(product.price.is_finite());
            prop_assert!(product.price >= 0.0);
        }
    }
}
