use portfolio_types::{StorageError, SystemPreference, Theme, ThemeStore, ThemeSurface};

use crate::interop::system_prefers_dark;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Theme slot in `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageThemeStore {
    key: String,
}

impl LocalStorageThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> Option<bool> {
        system_prefers_dark()
    }
}

/// Writes `data-theme` on `<html>`, which the stylesheet keys off.
/// Synchronous, so applying before the first render avoids a light flash.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeSurface;

impl ThemeSurface for DocumentThemeSurface {
    fn apply(&mut self, theme: Theme) {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}
