//! Shopping Cart State Management
//!
//! In-memory cart registry. Carts are never deleted, so a cart's id doubles
//! as its insertion index.

use super::{
    helpers::{add_line, total_quantity},
    models::{Cart, CartQuery},
};
use crate::catalog::ItemRegistry;
use crate::error::{ShopError, ShopResult};
use crate::query::{window, within};
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) const CART_NOT_FOUND: &str = "Cart not found";

// =============================================================================
// Cart Registry
// =============================================================================

/// Registry of carts keyed by id
#[derive(Debug, Default)]
pub struct CartRegistry {
    /// DashMap allows concurrent access without external Mutexes.
    carts: DashMap<usize, Cart>,

    /// Next id to hand out.
    next_id: AtomicUsize,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids allocated so far.
    pub fn len(&self) -> usize {
        self.next_id.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores an empty cart under the next free id.
    pub fn create(&self) -> Cart {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let cart = Cart::new(id);
        self.carts.insert(id, cart.clone());

        tracing::debug!(cart_id = id, "cart created");
        cart
    }

    pub fn get(&self, id: usize) -> ShopResult<Cart> {
        self.carts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(ShopError::NotFound(CART_NOT_FOUND))
    }

    /// Slices `[offset, offset + limit)` first, then keeps carts whose total
    /// price and total quantity fall inside the supplied bounds.
    pub fn list(&self, query: &CartQuery) -> Vec<Cart> {
        window(query.offset, query.limit, self.len())
            .filter_map(|id| self.carts.get(&id).map(|entry| entry.value().clone()))
            .filter(|cart| within(cart.price, query.min_price, query.max_price))
            .filter(|cart| {
                within(
                    total_quantity(&cart.items),
                    query.min_quantity,
                    query.max_quantity,
                )
            })
            .collect()
    }

    /// Adds one unit of `item_id` to the cart.
    ///
    /// The item is looked up by id alone, so a soft-deleted item can still be
    /// added. The cart entry stays locked for the whole update.
    pub fn add_item(&self, cart_id: usize, item_id: usize, items: &ItemRegistry) -> ShopResult<()> {
        let mut cart = self
            .carts
            .get_mut(&cart_id)
            .ok_or(ShopError::NotFound(CART_NOT_FOUND))?;

        let item = items
            .lookup(item_id)
            .ok_or(ShopError::NotFound("Item not found or deleted"))?;

        add_line(cart.value_mut(), &item);

        tracing::debug!(
            cart_id,
            item_id,
            lines = cart.items.len(),
            quantity = total_quantity(&cart.items),
            "item added to cart"
        );
        Ok(())
    }
}
