//! Catalog listing command.

use anyhow::Result;
use elegance_catalog::catalog::{Catalog, Product};
use elegance_catalog::listing::{CatalogView, CategoryFilter, SortKey, ViewMode, ViewState};
use serde::Serialize;

use super::ListArgs;
use crate::context::Context;
use crate::output::star_bar;

const STAR_COUNT: usize = 5;

/// One row of `elegance list --json`.
#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    position: usize,
    id: &'a str,
    name: &'a str,
    category: &'a str,
    price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_percent: Option<u32>,
    rating: f32,
    reviews: u32,
}

impl<'a> ListingRow<'a> {
    fn new(position: usize, product: &'a Product) -> Self {
        Self {
            position,
            id: product.id.as_str(),
            name: &product.name,
            category: product.category.as_str(),
            price: product.price.amount(),
            original_price: product.original_price.map(|p| p.amount()),
            discount_percent: product.discount_percent(),
            rating: product.rating,
            reviews: product.reviews,
        }
    }
}

/// Listing printed in JSON mode.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    state: &'a ViewState,
    total: usize,
    products: Vec<ListingRow<'a>>,
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let state = resolve_state(&args, ctx.config.view_state());
    let view = CatalogView::with_state(Catalog::seed(), state);

    if ctx.output.is_json() {
        let listing = Listing {
            state: view.state(),
            total: view.catalog().len(),
            products: view
                .displayed()
                .enumerate()
                .map(|(i, p)| ListingRow::new(i + 1, p))
                .collect(),
        };
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} / {} ({} layout)",
        view.filter().display_name(),
        view.sort().display_name(),
        view.view_mode()
    ));

    if let CategoryFilter::Unknown(raw) = view.filter() {
        ctx.output.warn(&format!("Unknown category '{}'; nothing matches", raw));
    }

    if view.displayed_len() == 0 {
        ctx.output.info("No fragrances found");
        return Ok(());
    }

    let widths = [3, 16, 9, 10, 8, 12];
    ctx.output
        .table_row(&["#", "NAME", "CATEGORY", "PRICE", "WAS", "RATING"], &widths);
    for (i, product) in view.displayed().enumerate() {
        let position = (i + 1).to_string();
        let price = product.price.display();
        let was = product
            .original_price
            .filter(|_| product.is_discounted())
            .map(|p| p.display())
            .unwrap_or_default();
        let rating = format!(
            "{} {:.1} ({})",
            star_bar(product.full_stars() as usize, STAR_COUNT),
            product.rating,
            product.reviews
        );
        ctx.output.table_row(
            &[
                &position,
                &product.name,
                product.category.display_name(),
                &price,
                &was,
                &rating,
            ],
            &widths,
        );
    }

    ctx.output.info(&format!(
        "Showing {} of {} products",
        view.displayed_len(),
        view.catalog().len()
    ));

    Ok(())
}

/// Command-line flags override the configured defaults.
fn resolve_state(args: &ListArgs, defaults: ViewState) -> ViewState {
    ViewState {
        filter: args
            .category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or(defaults.filter),
        sort: args.sort.as_deref().map(SortKey::parse).unwrap_or(defaults.sort),
        view_mode: args
            .view
            .as_deref()
            .map(ViewMode::parse)
            .unwrap_or(defaults.view_mode),
    }
}
