//! Page route handlers
//!
//! `GET /` renders the page. Every button on the page is a form posting to
//! one of the `/cart/*` routes, which update the session and redirect back
//! (303 See Other), or out to the files for `/cart/files`.

use super::render_page;
use crate::cart::helpers::{attach_session_cookie, format_item_summary, resolve_session_id};
use crate::cart::{Session, SharedState};
use crate::catalog::find_item;
use crate::error::StorefrontError;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};

/// Creates routes for the page and its form actions
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/cart/add/:id", post(add))
        .route("/cart/remove/:id", post(remove))
        .route("/cart/open", post(open))
        .route("/cart/close", post(close))
        .route("/cart/pay", post(pay))
        .route("/cart/files", post(go_to_files))
}

/// Endpoint: GET /
async fn index(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    // Clone so rendering happens outside the session lock.
    let (session, effect) = state.with_existing_session(&session_id, |session| {
        let effect = session.take_effect();
        (session.clone(), effect)
    });

    let html = render_page(&session, effect, &state.config.storefront.currency_symbol);
    attach_session_cookie(Html(html).into_response(), &session_id, is_new_session)
}

/// Applies `action` to the visitor's session and redirects back to the page.
///
/// With `store` unset, an unknown session is not created; use it for
/// actions that change nothing on an empty session.
fn update_and_return(
    state: &SharedState,
    headers: &HeaderMap,
    store: bool,
    action: impl FnOnce(&mut Session),
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(headers);
    if store {
        state.with_session(&session_id, action);
    } else {
        state.with_existing_session(&session_id, action);
    }
    attach_session_cookie(Redirect::to("/").into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/add/:id
async fn add(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, StorefrontError> {
    let item = find_item(&id).ok_or(StorefrontError::UnknownItem(id))?;
    Ok(update_and_return(&state, &headers, true, |session| {
        let added = session.add(item);
        tracing::info!(item = item.id, added, badge = session.badge_count(), "add to cart");
    }))
}

/// Endpoint: POST /cart/remove/:id
async fn remove(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    update_and_return(&state, &headers, false, |session| {
        let removed = session.remove(&id);
        tracing::info!(item = %id, removed, badge = session.badge_count(), "remove from cart");
    })
}

/// Endpoint: POST /cart/open
async fn open(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    update_and_return(&state, &headers, true, Session::open_cart)
}

/// Endpoint: POST /cart/close
async fn close(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    update_and_return(&state, &headers, false, Session::close_cart)
}

/// Endpoint: POST /cart/pay
/// Simulated payment; nothing is charged.
async fn pay(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    update_and_return(&state, &headers, false, |session| {
        if session.pay() {
            tracing::info!(items = %format_item_summary(&session.cart), "payment confirmed");
        } else {
            tracing::debug!("payment ignored, nothing to pay for");
        }
    })
}

/// Endpoint: POST /cart/files
/// Resets a paid session and sends the visitor to the files site.
/// Any other session is left alone and redirected back to the page.
async fn go_to_files(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let leaving = state.with_existing_session(&session_id, Session::go_to_files);

    let redirect = if leaving {
        let target = &state.config.storefront.files_url;
        tracing::info!(session = %session_id, target = %target, "leaving for files");
        Redirect::to(target)
    } else {
        tracing::debug!(session = %session_id, "files requested before payment");
        Redirect::to("/")
    };
    attach_session_cookie(redirect.into_response(), &session_id, is_new_session)
}
