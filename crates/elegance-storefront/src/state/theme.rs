//! Light/dark theme and the preference store behind it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class for the root `<html>` element, if the theme needs one.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the current theme is read from and toggled.
///
/// The storefront only ever reads and toggles; hosts can back this with
/// whatever preference store they have.
pub trait ThemePreference {
    /// The theme in effect.
    fn current_theme(&self) -> Theme;

    /// Switch to the other theme.
    fn toggle_theme(&mut self);
}

/// Theme preference held in memory for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InMemoryThemePreference {
    theme: Theme,
}

impl InMemoryThemePreference {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl ThemePreference for InMemoryThemePreference {
    fn current_theme(&self) -> Theme {
        self.theme
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "theme toggled");
    }
}
