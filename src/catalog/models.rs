//! Catalog Domain Models

use serde::Serialize;

/// A static product record with a list price and a promotional price.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    /// List price, shown struck through.
    pub original_price: u32,
    /// Promotional price actually charged.
    pub discounted_price: u32,
    pub compatible_servers: &'static [&'static str],
    pub description: &'static str,
}

impl CatalogItem {
    /// Percentage knocked off the list price, rounded down.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price == 0 {
            return 0;
        }
        let saved = self.original_price.saturating_sub(self.discounted_price);
        saved * 100 / self.original_price
    }
}

/// One entry of the "latest updates" feed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpdateEntry {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
