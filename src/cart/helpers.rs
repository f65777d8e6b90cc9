//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations, formatting
//! and the session cookie.

use crate::catalog::CatalogItem;
use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use uuid::Uuid;

/// Name of the cookie carrying the visitor's session id.
pub const SESSION_COOKIE: &str = "cart_session";

/// Appends `item` unless an item with the same id is already present.
///
/// Returns `true` when the cart changed.
pub fn add_to_cart(cart: &mut Vec<&'static CatalogItem>, item: &'static CatalogItem) -> bool {
    if cart.iter().any(|existing| existing.id == item.id) {
        return false;
    }
    cart.push(item);
    true
}

/// Drops every item whose id equals `id`. Returns `true` when the cart changed.
pub fn remove_from_cart(cart: &mut Vec<&'static CatalogItem>, id: &str) -> bool {
    let before = cart.len();
    cart.retain(|item| item.id != id);
    cart.len() != before
}

/// Sum of the list prices of everything in the cart.
pub fn original_total(cart: &[&'static CatalogItem]) -> u32 {
    cart.iter().map(|item| item.original_price).sum()
}

/// Amount due at checkout. Everything is on a 100% promotion, so this is
/// always zero regardless of the cart contents.
pub fn displayed_total(_cart: &[&'static CatalogItem]) -> u32 {
    0
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"Monoton 1.12.2, Nursultan 1.12.2"`.
pub fn format_item_summary(items: &[&'static CatalogItem]) -> String {
    items
        .iter()
        .map(|i| format!("{} {}", i.name, i.version))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the session id carried by the request cookie, or a fresh one.
///
/// The boolean is `true` when the id was just generated and still has to be
/// sent back with [`attach_session_cookie`].
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string());

    match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// Adds the `Set-Cookie` header for a freshly created session.
pub fn attach_session_cookie(mut response: Response, session_id: &str, is_new: bool) -> Response {
    if !is_new {
        return response;
    }

    let cookie_val = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id);
    match HeaderValue::from_str(&cookie_val) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(error = %e, "could not encode session cookie"),
    }
    response
}
