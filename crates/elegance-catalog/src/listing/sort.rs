//! Sort key and comparators.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering rule applied to the filtered product set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Catalog order, no comparator applied.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Rating, highest first.
    Rating,
    /// Name, A to Z.
    Name,
}

impl SortKey {
    /// Every sort key, in the order the sort select lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Name,
    ];

    /// Parse a sort key, falling back to [`SortKey::Featured`] for anything
    /// unrecognised.
    pub fn parse(key: &str) -> Self {
        match key {
            "featured" => SortKey::Featured,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "name" => SortKey::Name,
            other => {
                tracing::warn!(key = other, "unrecognised sort key, using featured order");
                SortKey::Featured
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Name => "Name A-Z",
        }
    }

    /// Check if this key keeps catalog order.
    pub fn is_identity(&self) -> bool {
        matches!(self, SortKey::Featured)
    }

    /// Compare two products under this key.
    ///
    /// `Featured` treats everything as equal, which under a stable sort
    /// leaves the input untouched.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Featured => Ordering::Equal,
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            // Numeric equality, so -0.0 and 0.0 tie. Ratings are never NaN
            // once the catalog is validated.
            SortKey::Rating => b
                .rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal),
            SortKey::Name => compare_names(&a.name, &b.name),
        }
    }
}

/// Case-insensitive name ordering, ties broken by the raw strings.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        SortKey::parse(&key)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
