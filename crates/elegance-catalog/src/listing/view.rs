//! View state and the catalog view controller.

use crate::catalog::{Catalog, Product};
use crate::listing::pipeline::apply_indices;
use crate::listing::query;
use crate::listing::{CategoryFilter, SortKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout used to render the displayed products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Grid, ViewMode::List];

    /// Parse a view mode, falling back to grid.
    pub fn parse(key: &str) -> Self {
        match key {
            "grid" => ViewMode::Grid,
            "list" => ViewMode::List,
            other => {
                tracing::warn!(key = other, "unrecognised view mode, using grid");
                ViewMode::Grid
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl From<String> for ViewMode {
    fn from(key: String) -> Self {
        ViewMode::parse(&key)
    }
}

impl From<ViewMode> for String {
    fn from(mode: ViewMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three independent pieces of listing state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Category constraint.
    #[serde(default)]
    pub filter: CategoryFilter,
    /// Ordering rule.
    #[serde(default)]
    pub sort: SortKey,
    /// Layout.
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl ViewState {
    /// Parse from a URL query string (`category`, `sort`, `view`).
    ///
    /// Missing keys keep their defaults; unknown keys are ignored.
    pub fn from_query_string(qs: &str) -> Self {
        ViewState::default().with_query_string(qs)
    }

    /// Override the keys present in `qs`, keeping the rest of `self`.
    pub fn with_query_string(mut self, qs: &str) -> Self {
        for (key, value) in query::parse_pairs(qs) {
            match key.as_str() {
                "category" => self.filter = CategoryFilter::parse(&value),
                "sort" => self.sort = SortKey::parse(&value),
                "view" => self.view_mode = ViewMode::parse(&value),
                _ => {}
            }
        }

        self
    }

    /// Encode as a URL query string, omitting default values.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if self.filter != CategoryFilter::All {
            pairs.push(format!("category={}", query::encode(self.filter.as_str())));
        }
        if self.sort != SortKey::Featured {
            pairs.push(format!("sort={}", self.sort.as_str()));
        }
        if self.view_mode != ViewMode::Grid {
            pairs.push(format!("view={}", self.view_mode.as_str()));
        }
        pairs.join("&")
    }
}

/// Owns a catalog plus its view state and keeps the displayed sequence
/// in step with every filter or sort change.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    state: ViewState,
    displayed: Vec<usize>,
}

impl CatalogView {
    /// Create a view in the initial state (all / featured / grid).
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, ViewState::default())
    }

    /// Create a view starting from an explicit state.
    pub fn with_state(catalog: Catalog, state: ViewState) -> Self {
        let mut view = Self {
            catalog,
            state,
            displayed: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.state.filter
    }

    pub fn sort(&self) -> SortKey {
        self.state.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    /// Change the category constraint.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.state.filter = filter;
        self.recompute();
    }

    /// Change the ordering rule.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.sort = sort;
        self.recompute();
    }

    /// Change the layout. Does not touch the displayed sequence.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.state.view_mode = view_mode;
    }

    /// Replace the whole state at once.
    pub fn set_state(&mut self, state: ViewState) {
        self.state = state;
        self.recompute();
    }

    /// Products to display, in order.
    pub fn displayed(&self) -> impl Iterator<Item = &Product> + '_ {
        let products = self.catalog.products();
        self.displayed.iter().map(move |&i| &products[i])
    }

    /// Number of products to display.
    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    fn recompute(&mut self) {
        self.displayed = apply_indices(self.catalog.products(), &self.state.filter, self.state.sort);
        tracing::debug!(
            filter = %self.state.filter,
            sort = %self.state.sort,
            shown = self.displayed.len(),
            total = self.catalog.len(),
            "recomputed catalog listing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn names(view: &CatalogView) -> Vec<&str> {
        view.displayed().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let view = CatalogView::new(Catalog::seed());
        assert_eq!(view.filter(), &CategoryFilter::All);
        assert_eq!(view.sort(), SortKey::Featured);
        assert_eq!(view.view_mode(), ViewMode::Grid);
        assert_eq!(view.displayed_len(), 6);
    }

    #[test]
    fn test_setters_are_independent() {
        let mut view = CatalogView::new(Catalog::seed());
        view.set_sort(SortKey::PriceLow);
        view.set_view_mode(ViewMode::List);
        view.set_filter(CategoryFilter::Only(Category::Luxury));

        assert_eq!(view.sort(), SortKey::PriceLow);
        assert_eq!(view.view_mode(), ViewMode::List);
        assert_eq!(names(&view), vec!["Golden Aurora", "Silk Whisper"]);

        view.set_filter(CategoryFilter::All);
        assert_eq!(view.sort(), SortKey::PriceLow);
        assert_eq!(view.view_mode(), ViewMode::List);
        assert_eq!(view.displayed_len(), 6);
    }

    #[test]
    fn test_view_mode_does_not_change_sequence() {
        let mut view = CatalogView::new(Catalog::seed());
        view.set_sort(SortKey::Name);
        let before: Vec<String> = names(&view).into_iter().map(String::from).collect();
        view.set_view_mode(ViewMode::List);
        assert_eq!(names(&view), before);
    }

    #[test]
    fn test_unknown_filter_empties_view() {
        let mut view = CatalogView::new(Catalog::seed());
        view.set_filter(CategoryFilter::parse("floral"));
        assert_eq!(view.displayed().count(), 0);
    }

    #[test]
    fn test_query_string_round_trip() {
        let state = ViewState::from_query_string("category=casual&sort=price-high&view=list");
        assert_eq!(state.filter, CategoryFilter::Only(Category::Casual));
        assert_eq!(state.sort, SortKey::PriceHigh);
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(
            ViewState::from_query_string(&state.to_query_string()),
            state
        );
    }

    #[test]
    fn test_query_string_defaults() {
        assert_eq!(ViewState::from_query_string(""), ViewState::default());
        assert_eq!(ViewState::default().to_query_string(), "");
        let fallback = ViewState::from_query_string("sort=bogus&view=tiles&page=2");
        assert_eq!(fallback, ViewState::default());
    }

    #[test]
    fn test_with_query_string_keeps_unset_keys() {
        let base = ViewState {
            filter: CategoryFilter::Only(Category::Evening),
            sort: SortKey::Name,
            view_mode: ViewMode::List,
        };
        let state = base.clone().with_query_string("sort=rating");
        assert_eq!(state.filter, base.filter);
        assert_eq!(state.sort, SortKey::Rating);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn test_unknown_category_stays_distinct() {
        let unknown = ViewState::from_query_string("category=LUXURY");
        let known = ViewState::from_query_string("category=luxury");

        assert_eq!(unknown.filter, CategoryFilter::Unknown("LUXURY".to_string()));
        assert_ne!(unknown, known);
        assert_ne!(unknown.to_query_string(), known.to_query_string());
        assert_eq!(ViewState::from_query_string(&unknown.to_query_string()), unknown);

        let shown = |state: ViewState| CatalogView::with_state(Catalog::seed(), state).displayed_len();
        assert_eq!(shown(known), 2);
        assert_eq!(shown(unknown), 0);
    }

    #[test]
    fn test_state_serde() {
        let state = ViewState {
            filter: CategoryFilter::Only(Category::Premium),
            sort: SortKey::Rating,
            view_mode: ViewMode::List,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"filter": "premium", "sort": "rating", "view_mode": "list"})
        );
        let back: ViewState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);

        let partial: ViewState = serde_json::from_str(r#"{"sort": "name"}"#).unwrap();
        assert_eq!(partial.sort, SortKey::Name);
        assert_eq!(partial.filter, CategoryFilter::All);
    }

    #[test]
    fn test_set_state() {
        let mut view = CatalogView::new(Catalog::seed());
        view.set_state(ViewState::from_query_string("category=premium"));
        assert_eq!(names(&view), vec!["Royal Oud"]);
    }
}
