//! Light/dark theme preference.
//!
//! # Invariants
//! - Theme defaults to `Light` when never set or unreadable.
//! - A failed theme write is logged and otherwise ignored.

use crate::repo::catalog_store::StoreError;
use log::{info, warn};

/// Binary UI theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Storage contract for the theme flag.
pub trait ThemePersistence {
    /// Returns `Ok(None)` when no preference has been stored.
    fn load_theme(&self) -> Result<Option<Theme>, StoreError>;
    fn save_theme(&self, theme: Theme) -> Result<(), StoreError>;
}

/// Current theme plus restore/toggle behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSession {
    theme: Theme,
}

impl ThemeSession {
    /// Restores the stored preference.
    pub fn restore(store: &impl ThemePersistence) -> Self {
        let theme = match store.load_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!("event=theme_restore module=session status=fallback theme=light error={err}");
                Theme::default()
            }
        };
        info!(
            "event=theme_restore module=session status=ok theme={}",
            theme.as_str()
        );
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and tries to persist it.
    pub fn toggle(&mut self, store: &impl ThemePersistence) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = store.save_theme(self.theme) {
            warn!(
                "event=theme_save module=session status=error theme={} error={err}",
                self.theme.as_str()
            );
        }
        self.theme
    }
}
