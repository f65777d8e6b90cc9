//! Latest updates feed.

use crate::catalog::UpdateEntry;
use crate::page::helpers::html_escape;

pub fn render_updates(updates: &[UpdateEntry]) -> String {
    let entries: String = updates
        .iter()
        .enumerate()
        .map(|(index, update)| {
            format!(
                r#"<article class="card update-card" style="animation-delay: {}ms">
            <span class="update-icon">✨</span>
            <div class="update-body">
                <h3 class="update-title">{}</h3>
                <span class="badge badge-outline">{}</span>
                <p class="update-description">{}</p>
            </div>
        </article>"#,
                index * 100,
                html_escape(update.title),
                html_escape(update.date),
                html_escape(update.description)
            )
        })
        .collect();

    format!(
        r#"<section id="updates" class="updates" data-section="updates">
    <div class="section-header">
        <h2>Latest updates</h2>
        <p>Keep up with news and improvements</p>
    </div>
    <div class="updates-list">
        {}
    </div>
</section>"#,
        entries
    )
}
