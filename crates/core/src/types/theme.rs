//! Colour theme preference.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The page colour theme.
///
/// Stored as the string `"true"` (dark) or `"false"` (light) and applied to
/// the document as `data-theme="dark"` / `data-theme="light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Build from a dark-mode flag.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Read a stored flag. Anything other than `"true"` is light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == "true")
    }

    /// The stored flag for this theme.
    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Value of the document `data-theme` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}
