//! Collection heading, listing controls, and the load-more footer.

use elegance_catalog::catalog::Category;
use elegance_catalog::listing::{CategoryFilter, SortKey, ViewMode, ViewState};

use crate::html::{escape, selected_attr};

/// Render the collection heading.
pub fn render_collection_header() -> String {
    r#"<section class="collection-header" id="collection" data-section="collection-header">
    <h2 class="collection-title">Our Premium Collection</h2>
    <p class="collection-tagline">Explore our carefully curated selection of luxury fragrances, each one crafted to perfection</p>
</section>"#
        .to_string()
}

/// Render the filter/sort selects and the layout buttons.
///
/// `counts` annotates each category option with its product count.
pub fn render_controls(state: &ViewState, counts: &[(Category, usize)]) -> String {
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    let mut filter_html: String = CategoryFilter::options()
        .iter()
        .map(|option| {
            let count = match option {
                CategoryFilter::Only(category) => counts
                    .iter()
                    .find(|(c, _)| c == category)
                    .map(|(_, n)| *n)
                    .unwrap_or(0),
                _ => total,
            };
            format!(
                r#"<option value="{}"{}>{} ({})</option>"#,
                option.as_str(),
                selected_attr(*option == state.filter),
                option.display_name(),
                count
            )
        })
        .collect();

    // Keep an unknown value visible so the select reflects the real state.
    if let CategoryFilter::Unknown(raw) = &state.filter {
        filter_html.push_str(&format!(
            r#"<option value="{}" selected disabled>{} (0)</option>"#,
            escape(raw),
            escape(raw)
        ));
    }

    let sort_html: String = SortKey::ALL
        .iter()
        .map(|key| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                selected_attr(*key == state.sort),
                key.display_name()
            )
        })
        .collect();

    let view_html: String = ViewMode::ALL
        .iter()
        .map(|&mode| render_view_button(state, mode))
        .collect();

    format!(
        r#"<section class="listing-controls" data-section="controls">
    <div class="listing-selects">
        <label class="select-control">
            <span class="sr-only">Filter by category</span>
            <select name="category" onchange="applyParam('category', this.value)">{}</select>
        </label>
        <label class="select-control">
            <span class="sr-only">Sort by</span>
            <select name="sort" onchange="applyParam('sort', this.value)">{}</select>
        </label>
    </div>
    <div class="view-control">{}</div>
</section>"#,
        filter_html, sort_html, view_html
    )
}

fn render_view_button(state: &ViewState, mode: ViewMode) -> String {
    let target = ViewState {
        view_mode: mode,
        ..state.clone()
    };
    let query = target.to_query_string();
    let href = if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query)
    };
    let (label, glyph) = match mode {
        ViewMode::Grid => ("Grid view", "&#x25A6;"),
        ViewMode::List => ("List view", "&#x2630;"),
    };
    let active = mode == state.view_mode;

    format!(
        r#"<a href="{}" class="view-btn{}" data-view="{}" aria-label="{}" aria-pressed="{}">{}</a>"#,
        escape(&href),
        if active { " active" } else { "" },
        mode.as_str(),
        label,
        active,
        glyph
    )
}

/// Render the load-more footer. Purely presentational.
pub fn render_load_more() -> String {
    r#"<div class="load-more" data-section="load-more">
    <button class="load-more-btn" type="button">Load More Products</button>
</div>"#
        .to_string()
}
