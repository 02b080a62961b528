//! Fragrance categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of categories a product can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Evening,
    Luxury,
    Casual,
    Premium,
}

impl Category {
    /// Every category, in enum order.
    pub const ALL: [Category; 4] = [
        Category::Evening,
        Category::Luxury,
        Category::Casual,
        Category::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Evening => "evening",
            Category::Luxury => "luxury",
            Category::Casual => "casual",
            Category::Premium => "premium",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "evening" => Some(Category::Evening),
            "luxury" => Some(Category::Luxury),
            "casual" => Some(Category::Casual),
            "premium" => Some(Category::Premium),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Evening => "Evening",
            Category::Luxury => "Luxury",
            Category::Casual => "Casual",
            Category::Premium => "Premium",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
