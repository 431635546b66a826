//! Portfolio page logic shared with the Dioxus frontend
//!
//! Everything here is browser-free:
//! - theme resolution and persistence (`theme`)
//! - scroll-driven active navigation (`sections`)
//! - geometry and decision helpers for page effects (`effects`)
//! - site configuration (`config`)
//!
//! Browser adapters implement the traits in `theme` and `sections` inside
//! `portfolio-ui`; tests use the in-memory doubles in `testing`, which is
//! only compiled for this crate's tests or with the `testing` feature.

pub mod config;
pub mod effects;
pub mod error;
pub mod sections;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod theme;

pub use config::SiteConfig;
pub use error::{ConfigError, StorageError, ThemeParseError};
pub use sections::{compute_active, ActiveSectionTracker, NavLinks, SectionBoundary};
pub use theme::{SystemPreference, Theme, ThemeController, ThemeStore, ThemeSurface};
