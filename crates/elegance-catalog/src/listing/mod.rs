//! Listing module.
//!
//! Derives the displayed product sequence from the catalog: category
//! filtering first, then sorting, under a grid or list layout.

mod filter;
mod pipeline;
mod query;
mod sort;
mod view;

pub use filter::CategoryFilter;
pub use pipeline::{apply, filter_products, sort_products};
pub use sort::SortKey;
pub use view::{CatalogView, ViewMode, ViewState};
