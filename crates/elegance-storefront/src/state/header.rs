//! Header chrome state.

use serde::{Deserialize, Serialize};

/// Mobile menu and search box state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderState {
    /// Whether the mobile menu is expanded.
    pub menu_open: bool,
    /// Text typed into the search box.
    pub search_query: String,
}

impl HeaderState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}
