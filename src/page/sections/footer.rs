//! Page footer.

pub fn render_footer() -> String {
    r#"<footer class="footer" data-section="footer">
    <p>© 2024 Minecraft Cheats Store. All cheats are for educational purposes.</p>
</footer>"#
        .to_string()
}
