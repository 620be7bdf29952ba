//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

use crate::error::ShopResult;
use crate::query::{default_limit, ensure_non_negative, ensure_positive_limit};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A line entry: one distinct catalog item inside a cart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemInCart {
    /// Id of the referenced catalog item
    pub id: usize,

    /// Item name, copied when the line was created
    pub name: String,

    /// How many times the item was added
    pub quantity: u64,

    /// Set to true when the line is created; never recomputed
    pub available: bool,
}

/// A shopping basket
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    /// Identifier assigned at creation
    pub id: usize,

    /// Lines in the order their items were first added
    pub items: Vec<ItemInCart>,

    /// Running total of the prices seen at each add
    pub price: f64,
}

impl Cart {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            items: Vec::new(),
            price: 0.0,
        }
    }
}

/// Query string of `GET /cart`
#[derive(Debug, Clone, Deserialize)]
pub struct CartQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<u64>,
    pub max_quantity: Option<u64>,
}

impl Default for CartQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            min_price: None,
            max_price: None,
            min_quantity: None,
            max_quantity: None,
        }
    }
}

impl CartQuery {
    pub fn validate(&self) -> ShopResult<()> {
        ensure_positive_limit(self.limit)?;
        ensure_non_negative("min_price", self.min_price)?;
        ensure_non_negative("max_price", self.max_price)
    }
}

/// Response for `POST /cart`
#[derive(Debug, Serialize)]
pub struct CreatedCart {
    pub id: usize,
}

/// Response for `POST /cart/{cart_id}/add/{item_id}`
#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    /// Status of the operation
    pub status: String,
}
