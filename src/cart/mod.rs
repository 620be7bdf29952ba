//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Cart, ItemInCart, queries, responses)
//! - Business logic helpers (line merging, quantity totals, formatting)
//! - The cart registry
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Cart;
pub use state::CartRegistry;
