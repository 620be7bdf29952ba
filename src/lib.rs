//! Shop API Library
//!
//! This library provides an in-memory product catalog and shopping cart
//! service exposed over HTTP.

// Domain modules
pub mod cart;
pub mod catalog;

// Shared plumbing
pub mod error;
pub mod query;
pub mod state;

// Infrastructure
pub mod config;
pub mod logging;
pub mod router;
pub mod shutdown;
