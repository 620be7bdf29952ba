//! Catalog Domain Models
//!
//! Items as stored and returned by the API, plus the request and query
//! shapes accepted by the `/item` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::ShopResult;
use crate::query::{default_limit, ensure_non_negative, ensure_positive_limit, lenient_bool};

/// A product in the catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    /// Identifier assigned at creation
    pub id: usize,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Soft-delete flag
    pub deleted: bool,
}

/// Body of `POST /item` and `PUT /item/{id}`.
///
/// Any `id` in the body is ignored; the path or the registry decides it.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub deleted: bool,
}

/// Query string of `GET /item`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub show_deleted: bool,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            min_price: None,
            max_price: None,
            show_deleted: false,
        }
    }
}

impl ItemQuery {
    pub fn validate(&self) -> ShopResult<()> {
        ensure_positive_limit(self.limit)?;
        ensure_non_negative("min_price", self.min_price)?;
        ensure_non_negative("max_price", self.max_price)
    }
}
