//! Category filter key.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value for the "no constraint" filter.
pub const ALL_KEY: &str = "all";

/// The category constraint applied to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product passes.
    #[default]
    All,
    /// Only products in this category pass.
    Only(Category),
    /// A value that names no known category; nothing passes.
    Unknown(String),
}

impl CategoryFilter {
    /// Parse a filter key. Never fails: unrecognised values become
    /// [`CategoryFilter::Unknown`] and match no product.
    pub fn parse(key: &str) -> Self {
        if key == ALL_KEY {
            return CategoryFilter::All;
        }
        match Category::from_str(key) {
            Some(category) => CategoryFilter::Only(category),
            None => {
                tracing::debug!(key, "unrecognised category filter, result will be empty");
                CategoryFilter::Unknown(key.to_string())
            }
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_KEY,
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Unknown(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.display_name(),
            CategoryFilter::Unknown(raw) => raw,
        }
    }

    /// Options offered in the category select, "all" first.
    pub fn options() -> Vec<CategoryFilter> {
        // Select order differs from enum order.
        let categories = [
            Category::Luxury,
            Category::Evening,
            Category::Casual,
            Category::Premium,
        ];
        std::iter::once(CategoryFilter::All)
            .chain(categories.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<String> for CategoryFilter {
    fn from(key: String) -> Self {
        CategoryFilter::parse(&key)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn product(category: Category) -> Product {
        Product::new("1", "Test", Price::new(1), category)
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("luxury"),
            CategoryFilter::Only(Category::Luxury)
        );
        assert_eq!(
            CategoryFilter::parse("floral"),
            CategoryFilter::Unknown("floral".to_string())
        );
    }

    #[test]
    fn test_matches() {
        let casual = product(Category::Casual);
        assert!(CategoryFilter::All.matches(&casual));
        assert!(CategoryFilter::Only(Category::Casual).matches(&casual));
        assert!(!CategoryFilter::Only(Category::Luxury).matches(&casual));
        assert!(!CategoryFilter::parse("bogus").matches(&casual));
    }

    #[test]
    fn test_options_order() {
        let keys: Vec<String> = CategoryFilter::options()
            .iter()
            .map(|o| o.as_str().to_string())
            .collect();
        assert_eq!(keys, vec!["all", "luxury", "evening", "casual", "premium"]);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Evening)).unwrap();
        assert_eq!(json, r#""evening""#);

        let unknown: CategoryFilter = serde_json::from_str(r#""floral""#).unwrap();
        assert_eq!(unknown, CategoryFilter::Unknown("floral".to_string()));
    }
}
