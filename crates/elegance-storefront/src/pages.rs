//! Whole-page composition: shell plus sections.

use elegance_catalog::listing::CatalogView;

use crate::data::{ContactChannel, StoreInfo};
use crate::route::Route;
use crate::sections::{
    render_collection_header, render_contact_channels, render_contact_hero, render_controls,
    render_header, render_load_more, render_not_found, render_product_grid, render_store_info,
};
use crate::shell::{HeadContent, Shell};
use crate::state::{CardStates, HeaderState, Theme};
use crate::styles::{STOREFRONT_SCRIPT, STOREFRONT_STYLES};
use crate::BRAND_NAME;

/// Render the product collection page.
pub fn render_catalog_page(
    view: &CatalogView,
    header: &HeaderState,
    theme: Theme,
    cards: &CardStates,
) -> String {
    let sections = vec![
        render_collection_header(),
        render_controls(view.state(), &view.catalog().category_counts()),
        render_product_grid(view, cards),
        render_load_more(),
    ];

    create_shell(BRAND_NAME.to_string(), theme, header, &Route::Catalog).render(&sections)
}

/// Render the contact page.
pub fn render_contact_page(header: &HeaderState, theme: Theme) -> String {
    let sections = vec![
        render_contact_hero(),
        render_contact_channels(&ContactChannel::defaults()),
        render_store_info(&StoreInfo::default()),
    ];

    let title = format!("Contact - {}", BRAND_NAME);
    create_shell(title, theme, header, &Route::Contact).render(&sections)
}

/// Render the fallback page for unknown paths.
pub fn render_not_found_page(path: &str, header: &HeaderState, theme: Theme) -> String {
    let title = format!("Not Found - {}", BRAND_NAME);
    let route = Route::NotFound(path.to_string());
    create_shell(title, theme, header, &route).render(&[render_not_found(path)])
}

fn create_shell(title: String, theme: Theme, header: &HeaderState, active: &Route) -> Shell {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "Luxury fragrances crafted to perfection by Elegance Perfumes",
        )
        .with_style(STOREFRONT_STYLES);

    let shell = Shell::new(head)
        .with_body_start(format!(
            "<body>\n{}\n<main>\n",
            render_header(header, theme, active)
        ))
        .with_body_end(format!("</main>\n{}\n</body>\n</html>", STOREFRONT_SCRIPT));

    match theme.root_class() {
        Some(class) => shell.with_html_class(class),
        None => shell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elegance_catalog::prelude::*;

    #[test]
    fn test_catalog_page_structure() {
        let view = CatalogView::new(Catalog::seed());
        let html = render_catalog_page(&view, &HeaderState::default(), Theme::Light, &CardStates::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Elegance Perfumes</title>"));
        assert!(html.contains("Our Premium Collection"));
        assert!(html.contains("Load More Products"));
        assert_eq!(html.matches("<article class=\"product-card").count(), 6);
        assert!(html.find("<header class=\"site-header\"").unwrap() < html.find("<main>").unwrap());
        assert!(!html.contains("class=\"dark\""));
    }

    #[test]
    fn test_dark_theme_marks_root() {
        let html = render_contact_page(&HeaderState::default(), Theme::Dark);
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("icon-moon"));
    }

    #[test]
    fn test_contact_page() {
        let html = render_contact_page(&HeaderState::default(), Theme::Light);
        assert!(html.contains("<title>Contact - Elegance Perfumes</title>"));
        assert!(html.contains("Get in Touch"));
        assert!(html.contains("Business Hours"));
        assert!(html.contains(r#"<a href="/contact" class="nav-link" aria-current="page">Contact</a>"#));
        assert!(!html.contains("<article class=\"product-card"));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found_page("/cart", &HeaderState::default(), Theme::Light);
        assert!(html.contains("<code>/cart</code>"));
        assert!(!html.contains(r#"aria-current="page">"#));
        assert!(html.contains(r#"<a href="/" class="nav-link">Products</a>"#));
    }
}
