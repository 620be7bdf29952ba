//! Error taxonomy shared by the catalog and cart handlers.
//!
//! Every variant maps onto one HTTP status; the body is a `{"detail": ...}`
//! envelope, except for `304 Not Modified` which must stay empty.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by store operations and request extraction.
#[derive(Debug, Error, PartialEq)]
pub enum ShopError {
    /// Unknown id, or an item hidden by its soft-delete flag.
    #[error("{0}")]
    NotFound(&'static str),

    /// Patch aimed at an absent or deleted item.
    #[error("Item not found")]
    NotModified,

    /// Payload or query violates the schema.
    #[error("{0}")]
    Unprocessable(String),
}

/// Result alias used throughout the crate.
pub type ShopResult<T> = Result<T, ShopError>;

impl ShopError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ShopError::NotFound(_) => StatusCode::NOT_FOUND,
            ShopError::NotModified => StatusCode::NOT_MODIFIED,
            ShopError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "responding with error");

        if status == StatusCode::NOT_MODIFIED {
            return status.into_response();
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ShopError {
    fn from(rejection: JsonRejection) -> Self {
        ShopError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ShopError {
    fn from(rejection: PathRejection) -> Self {
        ShopError::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ShopError {
    fn from(rejection: QueryRejection) -> Self {
        ShopError::Unprocessable(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ShopError::NotFound("Cart not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ShopError::NotModified.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(
            ShopError::Unprocessable("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_not_modified_has_empty_body() {
        let response = ShopError::NotModified.into_response();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_detail_envelope() {
        let response = ShopError::NotFound("Item not found").into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["detail"], "Item not found");
    }
}
