//! Price type for catalog listings.
//!
//! Storefront prices are whole rupees; there is no minor unit to track.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol shown in front of every price.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// A listing price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from whole units.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount in whole units.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Format for display, e.g. "₹6500".
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.0)
    }

    /// Rounded percentage saved against `original`.
    ///
    /// Only a strictly higher original price counts as a discount.
    pub fn discount_percent(&self, original: Price) -> Option<u32> {
        if original.0 <= self.0 {
            return None;
        }
        let saved = (original.0 - self.0) as f64 / original.0 as f64 * 100.0;
        Some(saved.round() as u32)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}
