//! Per-card hover and favorite flags.

use std::collections::HashMap;

use elegance_catalog::ProductId;
use serde::{Deserialize, Serialize};

/// Cosmetic state of one product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardState {
    pub hovered: bool,
    pub favorite: bool,
}

/// Card state keyed by product. Cards never touched read as default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStates {
    cards: HashMap<ProductId, CardState>,
}

impl CardStates {
    /// State of a card.
    pub fn get(&self, id: &ProductId) -> CardState {
        self.cards.get(id).copied().unwrap_or_default()
    }

    pub fn hover_start(&mut self, id: &ProductId) {
        self.entry(id).hovered = true;
    }

    pub fn hover_end(&mut self, id: &ProductId) {
        self.entry(id).hovered = false;
    }

    pub fn toggle_favorite(&mut self, id: &ProductId) {
        let card = self.entry(id);
        card.favorite = !card.favorite;
    }

    fn entry(&mut self, id: &ProductId) -> &mut CardState {
        self.cards.entry(id.clone()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_card_is_default() {
        let cards = CardStates::default();
        assert_eq!(cards.get(&ProductId::new("1")), CardState::default());
    }

    #[test]
    fn test_hover() {
        let mut cards = CardStates::default();
        let id = ProductId::new("1");
        cards.hover_start(&id);
        assert!(cards.get(&id).hovered);
        cards.hover_end(&id);
        assert!(!cards.get(&id).hovered);
    }

    #[test]
    fn test_favorite_is_per_card() {
        let mut cards = CardStates::default();
        let a = ProductId::new("1");
        let b = ProductId::new("2");
        cards.toggle_favorite(&a);
        assert!(cards.get(&a).favorite);
        assert!(!cards.get(&b).favorite);
        cards.toggle_favorite(&a);
        assert!(!cards.get(&a).favorite);
    }
}
