//! Product catalog and listing pipeline for the Elegance storefront.
//!
//! This crate provides the data side of the storefront:
//!
//! - **Catalog**: Products, categories, the canonical seed dataset
//! - **Listing**: Category filtering, sorting, view state and the catalog view
//!
//! # Example
//!
//! ```rust
//! use elegance_catalog::prelude::*;
//!
//! let mut view = CatalogView::new(Catalog::seed());
//! view.set_filter(CategoryFilter::parse("luxury"));
//! view.set_sort(SortKey::parse("price-high"));
//!
//! let names: Vec<&str> = view.displayed().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, vec!["Silk Whisper", "Golden Aurora"]);
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod listing;

pub use error::CatalogError;
pub use ids::ProductId;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Listing
    pub use crate::listing::{CatalogView, CategoryFilter, SortKey, ViewMode, ViewState};
}
