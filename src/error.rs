//! Error types for the storefront HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by storefront handlers.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// No catalog item carries the requested id.
    #[error("Unknown catalog item: {0}")]
    UnknownItem(String),
}

impl StorefrontError {
    pub fn status(&self) -> StatusCode {
        match self {
            StorefrontError::UnknownItem(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
