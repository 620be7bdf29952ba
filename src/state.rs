//! Application State
//!
//! Owns both registries for the lifetime of the process.

use crate::cart::CartRegistry;
use crate::catalog::ItemRegistry;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and the carts
#[derive(Debug, Default)]
pub struct AppState {
    pub items: ItemRegistry,
    pub carts: CartRegistry,
}

impl AppState {
    /// Creates a new AppState with empty registries
    pub fn new() -> Self {
        Self::default()
    }
}
