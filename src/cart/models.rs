//! Shopping Cart Domain Models
//!
//! This module contains the per-visitor session state and the payloads
//! exchanged with the JSON API.

use super::helpers::{add_to_cart, displayed_total, original_total, remove_from_cart};
use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

// =============================================================================
// Session State
// =============================================================================

/// What the visitor currently sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Cart dialog closed.
    Browsing,
    /// Dialog open, nothing selected yet.
    CartEmpty,
    /// Dialog open with at least one item.
    CartWithItems,
    /// Payment confirmation.
    Paid,
}

/// Particle burst fired when a payment is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confetti {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: ConfettiOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiOrigin {
    pub y: f32,
}

impl Confetti {
    pub const CELEBRATION: Confetti = Confetti {
        particle_count: 100,
        spread: 70,
        origin: ConfettiOrigin { y: 0.6 },
    };
}

/// UI state of a single visitor.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Selected items, unique by id, in the order they were added.
    pub cart: Vec<&'static CatalogItem>,
    pub is_cart_open: bool,
    pub is_paid: bool,
    /// Effect waiting to be shown on the next render.
    pub pending_effect: Option<Confetti>,
}

impl Session {
    /// Adds `item` unless it is already in the cart. Returns whether the cart changed.
    pub fn add(&mut self, item: &'static CatalogItem) -> bool {
        add_to_cart(&mut self.cart, item)
    }

    /// Removes the item with `id`. Returns whether the cart changed.
    pub fn remove(&mut self, id: &str) -> bool {
        remove_from_cart(&mut self.cart, id)
    }

    pub fn open_cart(&mut self) {
        self.is_cart_open = true;
    }

    /// Dismisses the dialog. Leaving the confirmation view resets it.
    pub fn close_cart(&mut self) {
        self.is_cart_open = false;
        self.is_paid = false;
    }

    /// Confirms the simulated payment and queues the confetti.
    ///
    /// Only the populated cart view offers payment, so an empty or already
    /// paid cart is left untouched and `false` is returned.
    pub fn pay(&mut self) -> bool {
        if self.cart.is_empty() || self.is_paid {
            return false;
        }
        self.is_paid = true;
        self.pending_effect = Some(Confetti::CELEBRATION);
        true
    }

    /// Resets the session as the visitor heads off to the files.
    ///
    /// The files link only exists on the payment confirmation, so nothing
    /// happens and `false` is returned unless the session is paid.
    pub fn go_to_files(&mut self) -> bool {
        if !self.is_paid {
            return false;
        }
        self.is_cart_open = false;
        self.is_paid = false;
        self.cart.clear();
        true
    }

    pub fn take_effect(&mut self) -> Option<Confetti> {
        self.pending_effect.take()
    }

    pub fn view(&self) -> View {
        match (self.is_cart_open, self.is_paid, self.cart.is_empty()) {
            (false, _, _) => View::Browsing,
            (true, true, _) => View::Paid,
            (true, false, true) => View::CartEmpty,
            (true, false, false) => View::CartWithItems,
        }
    }

    /// Number shown on the floating cart button.
    pub fn badge_count(&self) -> usize {
        self.cart.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cart.iter().any(|item| item.id == id)
    }
}

// =============================================================================
// API Payloads
// =============================================================================

/// Input for adding an item through the JSON API
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    /// Catalog item identifier
    pub id: String,
}

/// Session state as returned by the JSON API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub session_id: String,
    pub items: Vec<&'static CatalogItem>,
    pub badge: usize,
    /// Sum of list prices, display only.
    pub original_total: u32,
    /// Amount actually due.
    pub displayed_total: u32,
    pub is_cart_open: bool,
    pub is_paid: bool,
    pub view: View,
}

impl CartSnapshot {
    pub fn from_session(session_id: &str, session: &Session) -> Self {
        Self {
            session_id: session_id.to_string(),
            items: session.cart.clone(),
            badge: session.badge_count(),
            original_total: original_total(&session.cart),
            displayed_total: displayed_total(&session.cart),
            is_cart_open: session.is_cart_open,
            is_paid: session.is_paid,
            view: session.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_item;

    fn item(id: &str) -> &'static CatalogItem {
        find_item(id).unwrap()
    }

    #[test]
    fn view_follows_dialog_and_cart() {
        let mut session = Session::default();
        assert_eq!(session.view(), View::Browsing);

        session.open_cart();
        assert_eq!(session.view(), View::CartEmpty);

        session.add(item("1"));
        assert_eq!(session.view(), View::CartWithItems);

        assert!(session.pay());
        assert_eq!(session.view(), View::Paid);

        session.close_cart();
        assert_eq!(session.view(), View::Browsing);
        assert!(!session.is_paid);
    }

    #[test]
    fn reopening_after_close_shows_cart_not_confirmation() {
        let mut session = Session::default();
        session.add(item("2"));
        session.open_cart();
        session.pay();
        session.close_cart();
        session.open_cart();
        assert_eq!(session.view(), View::CartWithItems);
    }

    #[test]
    fn pay_requires_items() {
        let mut session = Session::default();
        session.open_cart();
        assert!(!session.pay());
        assert!(!session.is_paid);
        assert!(session.pending_effect.is_none());
    }

    #[test]
    fn pay_queues_confetti_once() {
        let mut session = Session::default();
        session.add(item("3"));
        session.open_cart();
        assert!(session.pay());
        assert!(!session.pay(), "second payment is a no-op");

        assert_eq!(session.take_effect(), Some(Confetti::CELEBRATION));
        assert_eq!(session.take_effect(), None);
    }

    #[test]
    fn go_to_files_clears_everything() {
        let mut session = Session::default();
        session.add(item("1"));
        session.add(item("4"));
        session.open_cart();
        session.pay();

        assert!(session.go_to_files());
        assert!(session.cart.is_empty());
        assert!(!session.is_cart_open);
        assert!(!session.is_paid);
        assert_eq!(session.badge_count(), 0);
    }

    #[test]
    fn go_to_files_requires_payment() {
        let mut session = Session::default();
        session.add(find_item("2").unwrap());
        assert!(!session.go_to_files());

        session.open_cart();
        assert!(!session.go_to_files());
        assert_eq!(session.badge_count(), 1);
        assert_eq!(session.view(), View::CartWithItems);
    }

    #[test]
    fn snapshot_reports_totals() {
        let mut session = Session::default();
        session.add(item("1"));
        session.add(item("2"));

        let snapshot = CartSnapshot::from_session("abc", &session);
        assert_eq!(snapshot.badge, 2);
        assert_eq!(snapshot.original_total, 600);
        assert_eq!(snapshot.displayed_total, 0);
        assert_eq!(snapshot.view, View::Browsing);
    }
}
