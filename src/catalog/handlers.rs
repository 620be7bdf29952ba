//! REST API handlers for catalog items

use super::models::{ItemQuery, ItemRequest};
use super::state::ITEM_NOT_FOUND;
use crate::error::ShopError;
use crate::query::parse_id;
use crate::state::SharedState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};

/// Creates routes for item-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/item", post(create_item).get(list_items))
        .route(
            "/item/:id",
            get(get_item)
                .put(update_item)
                .patch(patch_item)
                .delete(delete_item),
        )
}

/// Endpoint: POST /item
async fn create_item(
    State(state): State<SharedState>,
    body: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Json(request) = body?;
    let item = state.items.create(request);
    let location = format!("/item/{}", item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// Endpoint: GET /item/{id}
async fn get_item(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Path(raw) = path?;
    let id = parse_id("id", &raw)?.ok_or(ShopError::NotFound(ITEM_NOT_FOUND))?;
    Ok(Json(state.items.get(id)?))
}

/// Endpoint: GET /item?offset&limit&min_price&max_price&show_deleted
async fn list_items(
    State(state): State<SharedState>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Query(query) = query?;
    query.validate()?;
    Ok(Json(state.items.list(&query)))
}

/// Endpoint: PUT /item/{id}
async fn update_item(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Path(raw) = path?;
    let Json(request) = body?;
    let id = parse_id("id", &raw)?.ok_or(ShopError::NotFound(ITEM_NOT_FOUND))?;
    Ok(Json(state.items.update(id, request)?))
}

/// Endpoint: PATCH /item/{id}
/// Answers 304 for an absent or deleted item, 422 for a refused field.
async fn patch_item(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Path(raw) = path?;
    let Json(fields) = body?;
    let id = parse_id("id", &raw)?.ok_or(ShopError::NotModified)?;
    Ok(Json(state.items.patch(id, fields)?))
}

/// Endpoint: DELETE /item/{id}
async fn delete_item(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ShopError> {
    let Path(raw) = path?;
    let id = parse_id("id", &raw)?.ok_or(ShopError::NotFound(ITEM_NOT_FOUND))?;
    Ok(Json(state.items.delete(id)?))
}
