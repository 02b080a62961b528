//! The storefront: owns every piece of UI state and applies events to it.

use elegance_catalog::catalog::Catalog;
use elegance_catalog::listing::{CatalogView, CategoryFilter, SortKey, ViewMode, ViewState};
use elegance_catalog::ProductId;

use crate::pages::{render_catalog_page, render_contact_page, render_not_found_page};
use crate::route::{is_anchor_link, split_query, Route};
use crate::state::{CardStates, HeaderState, InMemoryThemePreference, ThemePreference};

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Category select changed.
    SetFilter(CategoryFilter),
    /// Sort select changed.
    SetSort(SortKey),
    /// Grid/list button pressed.
    SetViewMode(ViewMode),
    /// Theme button pressed.
    ToggleTheme,
    /// Mobile menu button pressed.
    ToggleMenu,
    /// A mobile menu entry was chosen.
    CloseMenu,
    /// Header search text edited.
    SetSearchQuery(String),
    /// Pointer entered a product card.
    HoverStart(ProductId),
    /// Pointer left a product card.
    HoverEnd(ProductId),
    /// Heart button on a product card pressed.
    ToggleFavorite(ProductId),
    /// Link followed to a path such as `/contact` or `/?sort=rating`.
    Navigate(String),
}

/// Single-owner UI state for one visitor session.
///
/// Events are applied synchronously; rendering reads the state and never
/// changes it.
#[derive(Debug, Clone)]
pub struct Storefront<T = InMemoryThemePreference> {
    view: CatalogView,
    defaults: ViewState,
    header: HeaderState,
    theme: T,
    cards: CardStates,
    route: Route,
}

impl Storefront<InMemoryThemePreference> {
    /// Storefront with an in-memory theme preference (light).
    pub fn new(catalog: Catalog) -> Self {
        Self::with_theme(catalog, InMemoryThemePreference::default())
    }
}

impl<T: ThemePreference> Storefront<T> {
    /// Storefront backed by a host-supplied theme preference.
    pub fn with_theme(catalog: Catalog, theme: T) -> Self {
        Self {
            view: CatalogView::new(catalog),
            defaults: ViewState::default(),
            header: HeaderState::default(),
            theme,
            cards: CardStates::default(),
            route: Route::Catalog,
        }
    }

    /// Replace the initial listing state, e.g. from configuration.
    ///
    /// Navigating to the collection without a query string returns to
    /// these defaults.
    pub fn with_defaults(mut self, defaults: ViewState) -> Self {
        self.view.set_state(defaults.clone());
        self.defaults = defaults;
        self
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn theme(&self) -> &T {
        &self.theme
    }

    pub fn cards(&self) -> &CardStates {
        &self.cards
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Apply one event.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::SetFilter(filter) => self.view.set_filter(filter),
            UiEvent::SetSort(sort) => self.view.set_sort(sort),
            UiEvent::SetViewMode(mode) => self.view.set_view_mode(mode),
            UiEvent::ToggleTheme => self.theme.toggle_theme(),
            UiEvent::ToggleMenu => self.header.toggle_menu(),
            UiEvent::CloseMenu => self.header.close_menu(),
            UiEvent::SetSearchQuery(query) => self.header.set_search_query(query),
            UiEvent::HoverStart(id) => {
                if self.knows(&id) {
                    self.cards.hover_start(&id);
                }
            }
            UiEvent::HoverEnd(id) => {
                if self.knows(&id) {
                    self.cards.hover_end(&id);
                }
            }
            UiEvent::ToggleFavorite(id) => {
                if self.knows(&id) {
                    self.cards.toggle_favorite(&id);
                }
            }
            UiEvent::Navigate(path) => self.navigate(&path),
        }
    }

    /// Follow a link. The collection re-reads its state from the query
    /// string, falling back to the defaults for missing keys. An anchor on
    /// the page already shown keeps the current state.
    pub fn navigate(&mut self, path_with_query: &str) {
        let route = Route::from_path(path_with_query);
        let in_page = route == self.route && is_anchor_link(path_with_query);
        if route == Route::Catalog && !in_page {
            let (_, query) = split_query(path_with_query);
            self.view
                .set_state(self.defaults.clone().with_query_string(query));
        }
        tracing::debug!(path = path_with_query, route = route.path(), "navigated");
        self.header.close_menu();
        self.route = route;
    }

    /// Render the current page.
    pub fn render(&self) -> String {
        let theme = self.theme.current_theme();
        match &self.route {
            Route::Catalog => render_catalog_page(&self.view, &self.header, theme, &self.cards),
            Route::Contact => render_contact_page(&self.header, theme),
            Route::NotFound(path) => render_not_found_page(path, &self.header, theme),
        }
    }

    fn knows(&self, id: &ProductId) -> bool {
        let known = self.view.catalog().contains(id);
        if !known {
            tracing::debug!(product_id = %id, "ignoring card event for unknown product");
        }
        known
    }
}
