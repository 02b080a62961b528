//! Not-found page body.

use crate::html::escape;

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h2>Page not found</h2>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="btn">Back to the collection</a>
</section>"#,
        escape(path)
    )
}
