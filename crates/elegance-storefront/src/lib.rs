//! Elegance Perfumes storefront.
//!
//! Server-rendered pages over the catalog listing:
//! - Header with theme toggle and mobile menu
//! - Product collection with category filter, sort and grid/list layout
//! - Product cards with hover and favorite state
//! - Static contact page
//!
//! All UI state lives in a [`Storefront`], which applies [`UiEvent`]s
//! synchronously and renders the current page as HTML.

mod html;
mod styles;

pub mod data;
pub mod pages;
pub mod route;
pub mod sections;
pub mod shell;
pub mod state;
pub mod storefront;

pub use route::Route;
pub use state::{CardState, CardStates, HeaderState, InMemoryThemePreference, Theme, ThemePreference};
pub use storefront::{Storefront, UiEvent};

/// Brand title shown in the header and page titles.
pub const BRAND_NAME: &str = "Elegance Perfumes";
