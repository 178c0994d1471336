//! Theme model shared by the toggle state machine and its components.
//!
//! DESIGN
//! ======
//! Exactly two themes exist. Everything that renders or persists a theme goes
//! through [`Theme`] so the icon, the root marker, and storage cannot drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Media query consulted for the system color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Accessible label of the toggle control. Does not change with state.
pub const TOGGLE_LABEL: &str = "Toggle theme";

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Error returned by [`Theme::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Storage/wire spelling: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decode a persisted value without validating it.
    ///
    /// Only `"dark"` selects the dark theme; any other string renders the
    /// same way the light theme does, so it is read as light. The raw value
    /// is not rewritten on mount.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == Self::Dark.as_str() { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Glyph shown on the toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    /// Icon for the *current* theme: the sun while dark (clicking reveals
    /// light), the moon while light.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::Sun,
            Theme::Light => Self::Moon,
        }
    }

    /// Name exposed as the glyph's `data-icon` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}
