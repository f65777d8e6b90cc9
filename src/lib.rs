//! Storefront Library
//!
//! This library serves a single-page storefront: a static catalog, a
//! per-visitor cart with a simulated payment, and a hand-off to an
//! external download site.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod page;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
