//! Hero banner section.

/// Render the hero banner with links to the catalog and the updates feed.
pub fn render_hero() -> String {
    r##"<section class="hero" data-section="hero">
    <div class="hero-content">
        <span class="badge badge-primary">🎮 Professional cheat store</span>
        <h1 class="hero-headline">Minecraft Cheats</h1>
        <p class="hero-subheadline">Powerful cheats for popular servers with extended features. Every cheat is now free!</p>
        <div class="hero-actions">
            <a href="#catalog" class="button button-primary">🛒 Go to catalog</a>
            <a href="#updates" class="button button-outline">🔔 Latest updates</a>
        </div>
    </div>
</section>"##
        .to_string()
}
