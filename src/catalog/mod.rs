//! Catalog Domain Module
//!
//! The storefront sells a fixed set of items and shows a fixed news feed.
//! Both are compiled into the binary:
//! - Domain models (CatalogItem, UpdateEntry)
//! - Static data and lookup by id

pub mod data;
pub mod models;

pub use data::{find_item, CATALOG, UPDATES};
pub use models::{CatalogItem, UpdateEntry};
