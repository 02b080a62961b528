//! Product record.

use crate::catalog::Category;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A fragrance in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Price,
    /// Pre-discount price, if the product is on offer.
    pub original_price: Option<Price>,
    /// Opaque image handle (URL or asset path).
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// One-line scent summary.
    pub scent: String,
    /// Long description.
    pub description: String,
    /// Short feature bullets, in display order.
    pub features: Vec<String>,
    /// Category tag.
    pub category: Category,
    /// Brand name.
    pub brand: String,
}

impl Product {
    /// Create a product with the required fields; everything else is empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            scent: String::new(),
            description: String::new(),
            features: Vec::new(),
            category,
            brand: String::new(),
        }
    }

    pub fn with_original_price(mut self, original: Price) -> Self {
        self.original_price = Some(original);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_scent(mut self, scent: impl Into<String>) -> Self {
        self.scent = scent.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Check the record's own invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(self.id.to_string()));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::InvalidRating {
                product_id: self.id.to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    /// Discount percentage shown on the card badge, if any.
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .and_then(|original| self.price.discount_percent(original))
    }

    /// Check if the product is on offer.
    pub fn is_discounted(&self) -> bool {
        self.discount_percent().is_some()
    }

    /// Whole stars to fill in the rating row.
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new("1", "Midnight Elegance", Price::new(6500), Category::Evening)
            .with_original_price(Price::new(8500))
            .with_rating(4.8, 234)
    }

    #[test]
    fn test_discount() {
        let product = sample();
        assert!(product.is_discounted());
        assert_eq!(product.discount_percent(), Some(24));
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let product = Product::new("2", "Golden Aurora", Price::new(7200), Category::Luxury);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(sample().full_stars(), 4);
        assert_eq!(sample().with_rating(5.0, 1).full_stars(), 5);
        assert_eq!(sample().with_rating(0.4, 1).full_stars(), 0);
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(sample().with_rating(0.0, 0).validate().is_ok());
        assert!(sample().with_rating(5.0, 0).validate().is_ok());
        assert!(sample().with_rating(5.1, 0).validate().is_err());
        assert!(sample().with_rating(-0.1, 0).validate().is_err());
        assert!(sample().with_rating(f32::NAN, 0).validate().is_err());
    }

    #[test]
    fn test_validate_name() {
        let product = Product::new("9", "  ", Price::new(1), Category::Casual);
        assert_eq!(
            product.validate(),
            Err(CatalogError::EmptyName("9".to_string()))
        );
    }

    #[test]
    fn test_builder_features() {
        let product = sample().with_features(["Long-lasting", "50ml"]);
        assert_eq!(product.features, vec!["Long-lasting", "50ml"]);
    }
}
