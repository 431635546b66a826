//! Scroll-spy for the navigation bar.
//!
//! Geometry is decided by the pure [`compute_active`]; flag mutation goes
//! through the [`NavLinks`] seam so the browser side stays a thin adapter.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extra distance below the navbar at which a section counts as entered.
pub const DEFAULT_LOOKAHEAD: f64 = 100.0;

/// Vertical extent of one page section, read from live layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBoundary {
    pub id: String,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionBoundary {
    pub fn new(id: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }
}

/// Last section in document order whose top, less the navbar and lookahead,
/// has been scrolled past. `None` when no section qualifies.
pub fn compute_active(
    scroll_y: f64,
    boundaries: &[SectionBoundary],
    navbar_height: f64,
    lookahead: f64,
) -> Option<&str> {
    boundaries
        .iter()
        .rev()
        .find(|b| scroll_y >= b.top_offset - navbar_height - lookahead)
        .map(|b| b.id.as_str())
}

/// The set of navigation links, each pointing at one section id.
pub trait NavLinks {
    fn targets(&self) -> Vec<String>;
    fn set_active(&mut self, target: &str, active: bool);
}

#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    lookahead: f64,
    current: Option<String>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD)
    }
}

impl ActiveSectionTracker {
    pub fn new(lookahead: f64) -> Self {
        Self {
            lookahead,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recompute from the current scroll position and re-apply the links,
    /// so a flag changed by anyone else is corrected on the next tick.
    pub fn on_scroll<L: NavLinks>(
        &mut self,
        links: &mut L,
        scroll_y: f64,
        boundaries: &[SectionBoundary],
        navbar_height: f64,
    ) -> Option<String> {
        let next =
            compute_active(scroll_y, boundaries, navbar_height, self.lookahead).map(str::to_string);
        if next != self.current {
            debug!(from = ?self.current, to = ?next, scroll_y, "active section changed");
        }
        self.apply(links, next.as_deref());
        next
    }

    /// Clear every link, then flag the one targeting `active`, if any.
    pub fn apply<L: NavLinks>(&mut self, links: &mut L, active: Option<&str>) {
        let targets = links.targets();
        for target in &targets {
            links.set_active(target, false);
        }
        if let Some(id) = active {
            if targets.iter().any(|t| t == id) {
                links.set_active(id, true);
            }
        }
        self.current = active.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNavLinks;

    fn page() -> Vec<SectionBoundary> {
        vec![
            SectionBoundary::new("home", 0.0, 500.0),
            SectionBoundary::new("about", 500.0, 400.0),
            SectionBoundary::new("skills", 900.0, 600.0),
        ]
    }

    #[test]
    fn test_compute_active_last_qualifying_wins() {
        let page = page();
        assert_eq!(compute_active(600.0, &page, 70.0, DEFAULT_LOOKAHEAD), Some("about"));
        assert_eq!(compute_active(730.0, &page, 70.0, DEFAULT_LOOKAHEAD), Some("skills"));
        assert_eq!(compute_active(0.0, &page, 70.0, DEFAULT_LOOKAHEAD), Some("home"));
    }

    #[test]
    fn test_compute_active_none_when_nothing_qualifies() {
        let page = vec![SectionBoundary::new("intro", 400.0, 300.0)];
        assert_eq!(compute_active(0.0, &page, 70.0, DEFAULT_LOOKAHEAD), None);
        assert_eq!(compute_active(100.0, &[], 70.0, DEFAULT_LOOKAHEAD), None);
    }

    #[test]
    fn test_apply_flags_only_matching_link() {
        let mut links = RecordingNavLinks::new(&["home", "about", "skills"]);
        let mut tracker = ActiveSectionTracker::default();

        tracker.apply(&mut links, Some("about"));
        assert_eq!(links.active(), vec!["about"]);

        tracker.apply(&mut links, Some("skills"));
        assert_eq!(links.active(), vec!["skills"]);

        tracker.apply(&mut links, Some("blog"));
        assert!(links.active().is_empty());
        assert_eq!(tracker.current(), Some("blog"));
    }

    #[test]
    fn test_on_scroll_restores_links_changed_elsewhere() {
        let page = page();
        let mut links = RecordingNavLinks::new(&["home", "about", "skills"]);
        let mut tracker = ActiveSectionTracker::default();

        tracker.on_scroll(&mut links, 600.0, &page, 70.0);
        links.set_active("about", false);
        links.set_active("home", true);

        assert_eq!(tracker.on_scroll(&mut links, 650.0, &page, 70.0).as_deref(), Some("about"));
        assert_eq!(links.active(), vec!["about"]);
    }
}
