//! Storefront page
//!
//! Server-side rendering of the single storefront page. Sections are plain
//! string renderers; [`render_page`] stitches them into one document for a
//! visitor's session.

pub mod handlers;
pub mod helpers;
pub mod sections;

use crate::cart::{Confetti, Session};
use crate::catalog::{CATALOG, UPDATES};
use sections::{
    render_cart_button, render_cart_dialog, render_catalog, render_footer, render_hero,
    render_updates,
};

pub use handlers::routes;

/// Script used to play the confetti effect in the browser.
const CONFETTI_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0b0b14; color: #f4f4f8; }
section { padding: 5rem 1rem; max-width: 80rem; margin: 0 auto; }
.hero { min-height: 80vh; display: flex; align-items: center; justify-content: center; text-align: center; }
.hero-headline { font-size: 4.5rem; margin: 1.5rem 0; }
.section-header { text-align: center; margin-bottom: 3rem; }
.catalog-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
.card { padding: 1.5rem; border: 1px solid #6d28d955; border-radius: 0.75rem; background: #141423; }
.badge { display: inline-block; padding: 0.1rem 0.6rem; border-radius: 999px; font-size: 0.75rem; border: 1px solid #6d28d9; }
.badge-primary { background: #6d28d933; color: #c4b5fd; font-size: 1rem; padding: 0.4rem 1.5rem; }
.badge-secondary { background: #db277733; border-color: #db2777; }
.badge-outline { background: transparent; }
.badge-sale { background: #22c55e33; border-color: #22c55e; color: #22c55e; margin-top: 0.5rem; }
.price-original { text-decoration: line-through; color: #9ca3af; margin-right: 0.5rem; }
.price-current { color: #22c55e; font-weight: bold; }
.button { cursor: pointer; border: 0; border-radius: 0.5rem; padding: 0.75rem 1.5rem; color: inherit; background: #6d28d9; text-decoration: none; }
.button-primary { background: linear-gradient(90deg, #6d28d9, #db2777); }
.button-outline { background: transparent; border: 1px solid #6d28d9; }
.button-ghost { background: transparent; }
.button-wide { width: 100%; }
.action-form { display: inline; }
.cart-fab { position: fixed; right: 2rem; bottom: 2rem; width: 4rem; height: 4rem; border-radius: 50%; border: 0; background: #6d28d9; font-size: 1.5rem; }
.cart-badge { position: absolute; top: -0.25rem; right: -0.25rem; background: #dc2626; border-radius: 999px; font-size: 0.8rem; padding: 0.1rem 0.45rem; }
.dialog-backdrop { position: fixed; inset: 0; background: #000a; display: flex; align-items: center; justify-content: center; }
.cart-dialog { position: static; max-width: 42rem; width: 100%; background: #141423; color: inherit; border-radius: 0.75rem; }
.cart-items { list-style: none; padding: 0; max-height: 24rem; overflow-y: auto; }
.cart-item { display: flex; justify-content: space-between; align-items: center; padding: 1rem; }
.footer { text-align: center; padding: 3rem 1rem; color: #9ca3af; }
"#;

/// Render the full page for a session.
///
/// `effect` is the one-shot effect taken from the session for this render.
pub fn render_page(session: &Session, effect: Option<Confetti>, currency: &str) -> String {
    let body = [
        render_hero(),
        render_catalog(CATALOG, currency),
        render_updates(UPDATES),
        render_footer(),
        render_cart_button(session),
        render_cart_dialog(session, currency),
        effect.map(render_confetti).unwrap_or_default(),
    ]
    .join("\n");

    render_document(&body)
}

fn render_document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Minecraft Cheats</title>
    <style>{}</style>
</head>
<body>
{}
</body>
</html>"#,
        STYLES, body
    )
}

fn render_confetti(effect: Confetti) -> String {
    let options = serde_json::to_string(&effect).unwrap_or_default();
    format!(
        r#"<div data-effect="confetti" hidden></div>
<script src="{}"></script>
<script>window.confetti && window.confetti({});</script>"#,
        CONFETTI_SCRIPT_URL, options
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_item;

    #[test]
    fn page_contains_all_sections() {
        let html = render_page(&Session::default(), None, "₽");
        for section in ["hero", "catalog", "updates", "footer"] {
            assert!(html.contains(&format!(r#"data-section="{}""#, section)));
        }
        assert!(!html.contains(r#"class="cart-fab""#));
        assert!(!html.contains("<dialog"));
        assert!(!html.contains(r#"data-effect="confetti""#));
    }

    #[test]
    fn rendered_classes_are_styled() {
        let mut session = Session::default();
        session.add(find_item("2").unwrap());
        session.open_cart();
        let html = render_page(&session, None, "₽");

        for class in [
            "button-primary",
            "button-outline",
            "button-ghost",
            "button-wide",
            "badge-primary",
            "badge-secondary",
            "badge-outline",
            "badge-sale",
            "cart-fab",
            "cart-badge",
            "cart-dialog",
        ] {
            assert!(html.contains(class), "{} is not rendered", class);
            assert!(STYLES.contains(&format!(".{} {{", class)), "{} has no style", class);
        }
    }

    #[test]
    fn confetti_options_are_embedded() {
        let mut session = Session::default();
        session.add(find_item("1").unwrap());
        session.open_cart();
        session.pay();
        let effect = session.take_effect();

        let html = render_page(&session, effect, "₽");
        assert!(html.contains(r#"data-effect="confetti""#));
        assert!(html.contains(r#""particleCount":100"#));
        assert!(html.contains(r#""spread":70"#));
        assert!(html.contains(r#""origin":{"y":0.6}"#));
    }
}
