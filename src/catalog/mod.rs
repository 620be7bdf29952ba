//! Catalog Domain Module
//!
//! This module contains the product catalog:
//! - Domain models (Item, request and query shapes)
//! - Patch helpers
//! - The item registry
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Item;
pub use state::ItemRegistry;
