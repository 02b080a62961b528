//! Product grid - the displayed sequence under the current layout.

use elegance_catalog::listing::{CatalogView, ViewMode};

use crate::sections::render_product_card;
use crate::state::CardStates;

/// Layout classes for the grid container.
pub fn layout_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "product-grid product-grid--grid",
        ViewMode::List => "product-grid product-grid--list",
    }
}

/// Render the product grid section.
pub fn render_product_grid(view: &CatalogView, cards: &CardStates) -> String {
    if view.displayed_len() == 0 {
        return render_empty_grid(view.view_mode());
    }

    let cards_html: String = view
        .displayed()
        .enumerate()
        .map(|(index, product)| render_product_card(product, cards.get(&product.id), index))
        .collect();

    format!(
        r#"<section class="product-listing" data-section="products">
    <div class="{}" data-view="{}">
        {}
    </div>
</section>"#,
        layout_class(view.view_mode()),
        view.view_mode().as_str(),
        cards_html
    )
}

fn render_empty_grid(mode: ViewMode) -> String {
    format!(
        r#"<section class="product-listing empty" data-section="products">
    <div class="{}" data-view="{}">
        <div class="empty-state">
            <h3>No fragrances found</h3>
            <p>Try another category.</p>
            <a href="/" class="empty-reset">Show all products</a>
        </div>
    </div>
</section>"#,
        layout_class(mode),
        mode.as_str()
    )
}
