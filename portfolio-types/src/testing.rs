//! In-memory implementations of the host seams, for tests.
//!
//! Enabled with the `testing` feature.

use crate::error::StorageError;
use crate::sections::NavLinks;
use crate::theme::{SystemPreference, Theme, ThemeStore, ThemeSurface};

#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    pub value: Option<String>,
    pub writes: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryThemeStore {
    pub fn with_value(value: Option<&str>) -> Self {
        Self {
            value: value.map(ToString::to_string),
            ..Self::default()
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read("reads disabled".to_string()));
        }
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("writes disabled".to_string()));
        }
        self.value = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPreference(pub Option<bool>);

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub applied: Option<Theme>,
    pub history: Vec<Theme>,
}

impl ThemeSurface for RecordingSurface {
    fn apply(&mut self, theme: Theme) {
        self.applied = Some(theme);
        self.history.push(theme);
    }
}

/// Navigation links as `(target, active)` pairs in document order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavLinks {
    pub links: Vec<(String, bool)>,
    pub writes: usize,
}

impl RecordingNavLinks {
    pub fn new(targets: &[&str]) -> Self {
        Self {
            links: targets.iter().map(|t| (t.to_string(), false)).collect(),
            writes: 0,
        }
    }

    pub fn active(&self) -> Vec<&str> {
        self.links
            .iter()
            .filter(|(_, active)| *active)
            .map(|(target, _)| target.as_str())
            .collect()
    }
}

impl NavLinks for RecordingNavLinks {
    fn targets(&self) -> Vec<String> {
        self.links.iter().map(|(target, _)| target.clone()).collect()
    }

    fn set_active(&mut self, target: &str, active: bool) {
        self.writes += 1;
        for link in self.links.iter_mut().filter(|(t, _)| t == target) {
            link.1 = active;
        }
    }
}
