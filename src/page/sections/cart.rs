//! Floating cart button and the cart dialog.
//!
//! The dialog body depends on the session [`View`]: an empty-cart notice,
//! the item list with totals and a pay button, or the payment confirmation
//! with the link to the files.

use crate::cart::helpers::{displayed_total, original_total};
use crate::cart::{Session, View};
use crate::page::helpers::{action_button, format_price, html_escape};

/// Render the floating cart button. Hidden while the cart is empty.
pub fn render_cart_button(session: &Session) -> String {
    if session.badge_count() == 0 {
        return String::new();
    }

    format!(
        r#"<form method="post" action="/cart/open" class="cart-fab-form">
    <button type="submit" class="cart-fab" aria-label="Open cart">🛒<span class="cart-badge" data-cart-badge>{}</span></button>
</form>"#,
        session.badge_count()
    )
}

/// Render the cart dialog, or nothing while it is closed.
pub fn render_cart_dialog(session: &Session, currency: &str) -> String {
    let (title, body) = match session.view() {
        View::Browsing => return String::new(),
        View::Paid => ("Payment successful! 🎉", render_paid()),
        View::CartEmpty => ("Cart", render_empty()),
        View::CartWithItems => ("Cart", render_items(session, currency)),
    };

    format!(
        r#"<div class="dialog-backdrop">
<dialog open class="cart-dialog" data-view="{view}">
    <header class="dialog-header">
        <h2 class="dialog-title">{title}</h2>
        {close}
    </header>
    {body}
</dialog>
</div>"#,
        view = view_name(session.view()),
        title = title,
        close = action_button("/cart/close", "button button-ghost dialog-close", "✕"),
        body = body
    )
}

fn view_name(view: View) -> &'static str {
    match view {
        View::Browsing => "browsing",
        View::CartEmpty => "cart-empty",
        View::CartWithItems => "cart-with-items",
        View::Paid => "paid",
    }
}

fn render_empty() -> String {
    r#"<div class="cart-empty">
        <span class="cart-empty-icon">🛒</span>
        <p>Your cart is empty</p>
    </div>"#
        .to_string()
}

fn render_items(session: &Session, currency: &str) -> String {
    let rows: String = session
        .cart
        .iter()
        .map(|item| {
            format!(
                r#"<li class="cart-item" data-item-id="{id}">
            <div class="cart-item-info">
                <h4>{name}</h4>
                <p>{version}</p>
            </div>
            <div class="cart-item-pricing">
                <span class="price-original">{original}</span>
                <span class="price-current">{discounted}</span>
            </div>
            {remove}
        </li>"#,
                id = html_escape(item.id),
                name = html_escape(item.name),
                version = html_escape(item.version),
                original = format_price(item.original_price, currency),
                discounted = format_price(item.discounted_price, currency),
                remove = action_button(
                    &format!("/cart/remove/{}", item.id),
                    "button button-ghost",
                    "🗑"
                ),
            )
        })
        .collect();

    format!(
        r#"<ul class="cart-items">
        {rows}
    </ul>
    <div class="cart-summary">
        <span class="cart-summary-label">Total:</span>
        <span class="price-original" data-original-total>{original_total}</span>
        <span class="price-current" data-displayed-total>{displayed_total}</span>
    </div>
    {pay}"#,
        rows = rows,
        original_total = format_price(original_total(&session.cart), currency),
        displayed_total = format_price(displayed_total(&session.cart), currency),
        pay = action_button("/cart/pay", "button button-primary button-wide", "💳 Pay"),
    )
}

fn render_paid() -> String {
    format!(
        r#"<div class="cart-paid">
        <span class="cart-paid-icon">✔</span>
        <p>Your cheats are ready to download!</p>
        {}
    </div>"#,
        action_button("/cart/files", "button button-primary", "⬇ Go to files")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_item;

    #[test]
    fn button_hidden_for_empty_cart() {
        assert!(render_cart_button(&Session::default()).is_empty());
    }

    #[test]
    fn button_shows_distinct_count() {
        let mut session = Session::default();
        session.add(find_item("1").unwrap());
        session.add(find_item("1").unwrap());
        session.add(find_item("2").unwrap());
        assert!(render_cart_button(&session).contains("data-cart-badge>2<"));
    }

    #[test]
    fn dialog_follows_view() {
        let mut session = Session::default();
        assert!(render_cart_dialog(&session, "₽").is_empty());

        session.open_cart();
        assert!(render_cart_dialog(&session, "₽").contains("Your cart is empty"));

        session.add(find_item("4").unwrap());
        let html = render_cart_dialog(&session, "₽");
        assert!(html.contains(r#"data-view="cart-with-items""#));
        assert!(html.contains("data-original-total>863₽<"));
        assert!(html.contains("data-displayed-total>0₽<"));
        assert!(html.contains("/cart/remove/4"));

        session.pay();
        let html = render_cart_dialog(&session, "₽");
        assert!(html.contains("Payment successful!"));
        assert!(html.contains("/cart/files"));
        assert!(!html.contains("/cart/pay"));
    }
}
