//! Dark-mode preference.
//!
//! The setting is read once when the navigation bar mounts and written on
//! every toggle. The rendered `data-theme` attribute always comes from the
//! in-memory value, which only changes after the write succeeded, so the
//! stored flag and the page never disagree.

use sharp_style_core::Theme;
use tracing::instrument;

use crate::storage::{DARK_MODE_KEY, KeyValueStore, StorageError};

/// The visitor's theme, loaded from storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DarkModeSetting {
    theme: Theme,
}

impl DarkModeSetting {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Read the stored flag, defaulting to light when absent, unreadable,
    /// or when there is no storage medium.
    #[instrument(skip(store))]
    pub async fn load<S: KeyValueStore>(store: Option<&S>) -> Self {
        let Some(store) = store else {
            return Self::default();
        };

        match store.get(DARK_MODE_KEY).await {
            Ok(value) => Self::new(value.as_deref().map_or(Theme::Light, Theme::from_stored)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read dark mode preference");
                Self::default()
            }
        }
    }

    /// Flip the theme and persist it. Returns `true` when dark mode is now on.
    ///
    /// Without a storage medium the flip is kept in memory only.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails; the setting is unchanged.
    #[instrument(skip(self, store), fields(from = %self.theme))]
    pub async fn toggle<S: KeyValueStore>(
        &mut self,
        store: Option<&S>,
    ) -> Result<bool, StorageError> {
        let next = self.theme.toggled();
        if let Some(store) = store {
            store.set(DARK_MODE_KEY, next.as_stored().to_string()).await?;
        }
        self.theme = next;
        Ok(next.is_dark())
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Value for the document `data-theme` attribute.
    #[must_use]
    pub const fn attr(&self) -> &'static str {
        self.theme.as_attr()
    }
}
