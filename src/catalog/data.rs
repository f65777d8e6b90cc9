//! Static catalog and news feed.

use super::models::{CatalogItem, UpdateEntry};

pub const CATALOG: &[CatalogItem] = &[
    CatalogItem {
        id: "1",
        name: "Monoton",
        version: "1.12.2",
        original_price: 250,
        discounted_price: 0,
        compatible_servers: &["FunTime", "ReallyWorld"],
        description: "Full build with every feature unlocked",
    },
    CatalogItem {
        id: "2",
        name: "Dimasik",
        version: "1.12.2",
        original_price: 350,
        discounted_price: 0,
        compatible_servers: &["SpookyTime", "HolyWorld"],
        description: "Full build with an extended feature set",
    },
    CatalogItem {
        id: "3",
        name: "RelakeDLC",
        version: "1.12.2",
        original_price: 100,
        discounted_price: 0,
        compatible_servers: &["FunTime", "ReallyWorld", "SpookyTime"],
        description: "Lightweight build with the essentials",
    },
    CatalogItem {
        id: "4",
        name: "Nursultan",
        version: "1.12.2",
        original_price: 863,
        discounted_price: 0,
        compatible_servers: &["HolyWorld", "FunTime"],
        description: "Premium build with every module included",
    },
];

/// Newest first.
pub const UPDATES: &[UpdateEntry] = &[
    UpdateEntry {
        date: "20.12.2024",
        title: "Monoton v2.5 update",
        description: "Support for new servers and assorted bug fixes",
    },
    UpdateEntry {
        date: "18.12.2024",
        title: "Nursultan released",
        description: "Premium build with an extended feature set is out",
    },
    UpdateEntry {
        date: "15.12.2024",
        title: "Everything on sale!",
        description: "Every item in the catalog is now completely free",
    },
];

/// Looks up a catalog item by id.
pub fn find_item(id: &str) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 4);
    }

    #[test]
    fn every_item_is_fully_discounted() {
        for item in CATALOG {
            assert_eq!(item.discounted_price, 0, "{} should be free", item.name);
            assert_eq!(item.discount_percent(), 100);
            assert!(!item.compatible_servers.is_empty());
        }
    }

    #[test]
    fn find_item_by_id() {
        assert_eq!(find_item("4").map(|i| i.name), Some("Nursultan"));
        assert!(find_item("5").is_none());
        assert!(find_item("").is_none());
    }
}
