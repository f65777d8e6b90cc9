//! Catalog grid section.

use crate::catalog::CatalogItem;
use crate::page::helpers::{action_button, format_price, html_escape};

/// Render the catalog grid, one card per item.
pub fn render_catalog(items: &[CatalogItem], currency: &str) -> String {
    let cards: String = items
        .iter()
        .enumerate()
        .map(|(index, item)| render_card(item, index, currency))
        .collect();

    format!(
        r#"<section id="catalog" class="catalog" data-section="catalog">
    <div class="section-header">
        <h2>Cheat catalog</h2>
        <p>Pick the right cheat for your servers</p>
    </div>
    <div class="catalog-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

fn render_card(item: &CatalogItem, index: usize, currency: &str) -> String {
    let servers: String = item
        .compatible_servers
        .iter()
        .map(|server| format!(r#"<span class="badge badge-secondary">{}</span>"#, html_escape(server)))
        .collect();

    // Cards fade in one after another.
    let delay_ms = index * 100;

    format!(
        r#"<article class="card product-card" data-item-id="{id}" style="animation-delay: {delay_ms}ms">
            <div class="card-header">
                <h3 class="product-name">{name}</h3>
                <span class="badge badge-outline">{version}</span>
            </div>
            <p class="product-description">{description}</p>
            <div class="product-servers">{servers}</div>
            <div class="product-pricing">
                <span class="price-original">{original}</span>
                <span class="price-current">{discounted}</span>
                <span class="badge badge-sale">🎉 {percent}% off</span>
            </div>
            {buy}
        </article>"#,
        id = html_escape(item.id),
        delay_ms = delay_ms,
        name = html_escape(item.name),
        version = html_escape(item.version),
        description = html_escape(item.description),
        servers = servers,
        original = format_price(item.original_price, currency),
        discounted = format_price(item.discounted_price, currency),
        percent = item.discount_percent(),
        buy = action_button(&format!("/cart/add/{}", item.id), "button button-primary button-wide", "🛒 Buy"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn renders_every_item_with_prices() {
        let html = render_catalog(CATALOG, "₽");
        for item in CATALOG {
            assert!(html.contains(&format!(r#"data-item-id="{}""#, item.id)));
            assert!(html.contains(&format!("/cart/add/{}", item.id)));
            assert!(html.contains(&format!("{}₽", item.original_price)));
        }
        assert!(html.contains("HolyWorld"));
        assert!(html.contains("animation-delay: 300ms"));
    }
}
