//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart line bookkeeping.

use super::models::{Cart, ItemInCart};
use crate::catalog::Item;

/// Records one add of `item` to `cart`.
///
/// # Behaviour
///
/// * If the cart already has a line for the item id, its `quantity` grows by
///   one. The line's name is left as it was when first added.
/// * Otherwise a new line with quantity 1 is appended.
/// * Either way the item's current price is added to the cart total, which is
///   never recomputed afterwards.
pub fn add_line(cart: &mut Cart, item: &Item) {
    if let Some(existing) = cart.items.iter_mut().find(|line| line.id == item.id) {
        existing.quantity += 1;
    } else {
        cart.items.push(ItemInCart {
            id: item.id,
            name: item.name.clone(),
            quantity: 1,
            available: true,
        });
    }
    cart.price += item.price;
}

/// Sum of all line quantities.
pub fn total_quantity(items: &[ItemInCart]) -> u64 {
    items.iter().map(|line| line.quantity).sum()
}
