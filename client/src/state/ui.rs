//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of page view-models so the shell can be
//! restyled without touching page logic. The theme is the only value that
//! outlives a page; see `util::dark_mode` for persistence.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Colour scheme applied to the `<html>` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted / attribute form of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the persisted form. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph for the header toggle: shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Shell state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub nav_open: bool,
}
