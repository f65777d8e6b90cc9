//! Shopping Cart Domain Module
//!
//! This module contains all cart state logic, including:
//! - Session state machine (browsing, cart open, paid)
//! - Business logic helpers (cart membership, totals, session cookie)
//! - Application state management
//! - JSON API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartSnapshot, Confetti, Session, View};
pub use state::{AppState, SharedState};
