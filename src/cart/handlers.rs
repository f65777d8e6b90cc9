//! REST API handlers for shopping cart operations
//!
//! JSON counterparts of the page actions, keyed by the same session cookie.

use super::{helpers::*, models::*, state::SharedState};
use crate::catalog::{find_item, CatalogItem, CATALOG};
use crate::error::StorefrontError;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/catalog", get(list_catalog))
        .route("/api/cart", get(get_cart))
        .route("/api/cart/items", post(add_item))
        .route("/api/cart/items/:id", delete(remove_item))
}

/// Endpoint: GET /api/catalog
async fn list_catalog() -> Json<&'static [CatalogItem]> {
    Json(CATALOG)
}

/// Endpoint: GET /api/cart
async fn get_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let snapshot = state.snapshot(&session_id);
    attach_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /api/cart/items
/// Adds a catalog item; adding one that is already present changes nothing.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemInput>,
) -> Result<Response, StorefrontError> {
    let item = find_item(&payload.id).ok_or(StorefrontError::UnknownItem(payload.id))?;
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let added = state.with_session(&session_id, |session| session.add(item));
    tracing::info!(session = %session_id, item = item.id, added, "api add to cart");

    let snapshot = state.snapshot(&session_id);
    Ok(attach_session_cookie(
        Json(snapshot).into_response(),
        &session_id,
        is_new_session,
    ))
}

/// Endpoint: DELETE /api/cart/items/:id
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let removed = state.with_existing_session(&session_id, |session| session.remove(&id));
    tracing::info!(session = %session_id, item = %id, removed, "api remove from cart");

    let snapshot = state.snapshot(&session_id);
    attach_session_cookie(Json(snapshot).into_response(), &session_id, is_new_session)
}
