//! Light/dark theme state.
//!
//! `ThemeController` is the only writer of the theme. It reconciles three
//! signals into one applied value: the persisted preference, the OS-level
//! `prefers-color-scheme`, and explicit toggles. Every mutation goes through
//! [`ThemeController::set`], which applies to the surface and then persists,
//! so the stored value and the `data-theme` attribute never diverge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StorageError, ThemeParseError};

/// Storage key used when no site config overrides it.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Key-value slot holding the persisted theme string.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// OS-level dark mode preference. `None` when the host cannot tell.
pub trait SystemPreference {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Whatever renders the theme: the document attribute and the toggle control.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

pub struct ThemeController<S, P, U> {
    store: S,
    system: P,
    surface: U,
    current: Theme,
}

impl<S, P, U> ThemeController<S, P, U>
where
    S: ThemeStore,
    P: SystemPreference,
    U: ThemeSurface,
{
    pub fn new(store: S, system: P, surface: U) -> Self {
        Self {
            store,
            system,
            surface,
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Resolve persisted -> OS preference -> `Light`, then apply and persist.
    ///
    /// Safe to call repeatedly; the only observable difference is a redundant
    /// write of the same value.
    pub fn initialize(&mut self) -> Theme {
        let theme = self
            .persisted()
            .or_else(|| self.system.prefers_dark().map(Theme::from_prefers_dark))
            .unwrap_or_default();
        self.set(theme)
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }

    /// Follows the OS preference, replacing any earlier explicit toggle.
    pub fn on_system_preference_change(&mut self, prefers_dark: bool) -> Theme {
        self.set(Theme::from_prefers_dark(prefers_dark))
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.surface.apply(theme);
        if let Err(e) = self.store.save(theme.as_str()) {
            warn!(error = %e, theme = %theme, "failed to persist theme preference");
        }
        debug!(theme = %theme, "theme applied");
        theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    fn persisted(&self) -> Option<Theme> {
        match self.store.load() {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!(error = %e, "ignoring persisted theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "theme storage unreadable, treating as absent");
                None
            }
        }
    }
}
