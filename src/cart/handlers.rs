//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for cart creation, lookup,
//! listing and adding catalog items.

use super::models::*;
use super::state::CART_NOT_FOUND;
use crate::error::ShopError;
use crate::query::parse_id;
use crate::state::SharedState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", post(create_cart).get(list_carts))
        .route("/cart/:id", get(get_cart))
        .route("/cart/:id/add/:item_id", post(add_item))
}

/// Endpoint: POST /cart
async fn create_cart(State(state): State<SharedState>) -> impl IntoResponse {
    let cart = state.carts.create();

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/cart/{}", cart.id))],
        Json(CreatedCart { id: cart.id }),
    )
}

/// Endpoint: GET /cart/{id}
async fn get_cart(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Path(raw) = path?;
    let id = parse_id("id", &raw)?.ok_or(ShopError::NotFound(CART_NOT_FOUND))?;
    Ok(Json(state.carts.get(id)?))
}

/// Endpoint: GET /cart?offset&limit&min_price&max_price&min_quantity&max_quantity
async fn list_carts(
    State(state): State<SharedState>,
    query: Result<Query<CartQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Query(query) = query?;
    query.validate()?;
    Ok(Json(state.carts.list(&query)))
}

/// Endpoint: POST /cart/{cart_id}/add/{item_id}
/// An unknown cart is reported before an unknown item.
async fn add_item(
    State(state): State<SharedState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Path((raw_cart_id, raw_item_id)) = path?;
    let cart_id =
        parse_id("cart_id", &raw_cart_id)?.ok_or(ShopError::NotFound(CART_NOT_FOUND))?;
    let item_id = parse_id("item_id", &raw_item_id)?;

    match item_id {
        Some(item_id) => state.carts.add_item(cart_id, item_id, &state.items)?,
        None => {
            state.carts.get(cart_id)?;
            return Err(ShopError::NotFound("Item not found or deleted"));
        }
    }

    Ok(Json(AddItemResponse {
        status: "Item added".to_string(),
    }))
}
