//! Small formatting helpers shared by the section renderers.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formats an amount followed by the currency symbol, e.g. `250₽`.
pub fn format_price(amount: u32, currency: &str) -> String {
    format!("{}{}", amount, html_escape(currency))
}

/// A form posting to `action` with a single submit button.
pub fn action_button(action: &str, class: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="{}" class="action-form"><button type="submit" class="{}">{}</button></form>"#,
        html_escape(action),
        html_escape(class),
        label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn price_has_trailing_symbol() {
        assert_eq!(format_price(863, "₽"), "863₽");
        assert_eq!(format_price(0, "₽"), "0₽");
    }
}
