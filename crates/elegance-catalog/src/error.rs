//! Catalog error types.

use thiserror::Error;

/// Errors raised while assembling a catalog.
///
/// Listing operations never fail; these only come out of [`Catalog::new`].
///
/// [`Catalog::new`]: crate::catalog::Catalog::new
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Rating outside the 0-5 range (or not a number).
    #[error("Invalid rating {rating} for product {product_id}: must be between 0 and 5")]
    InvalidRating { product_id: String, rating: f32 },

    /// Product has no display name.
    #[error("Product {0} has an empty name")]
    EmptyName(String),
}
