//! Local UI state: theme, header, and per-card flags.

mod card;
mod header;
mod theme;

pub use card::{CardState, CardStates};
pub use header::HeaderState;
pub use theme::{InMemoryThemePreference, Theme, ThemePreference};
