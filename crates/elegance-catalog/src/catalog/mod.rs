//! Product catalog module.
//!
//! Contains the product record, the category set, and the seed dataset.

mod category;
mod product;
mod seed;

pub use category::Category;
pub use product::Product;

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::ids::ProductId;

/// A fixed, validated list of products.
///
/// The catalog is built once and never mutated; insertion order is the
/// "featured" order used by the listing pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProductId(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The canonical Elegance dataset.
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
        }
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Check whether a product id exists.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products per category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .products
                    .iter()
                    .filter(|p| p.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}
