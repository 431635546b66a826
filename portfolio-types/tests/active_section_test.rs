//! Scroll-spy selection and navigation link flags.
//!
//! Run with: cargo test -p portfolio-types --test active_section_test

use portfolio_types::sections::DEFAULT_LOOKAHEAD;
use portfolio_types::testing::RecordingNavLinks;
use portfolio_types::{compute_active, ActiveSectionTracker, SectionBoundary};

const NAVBAR: f64 = 70.0;

fn portfolio_page() -> Vec<SectionBoundary> {
    vec![
        SectionBoundary::new("home", 0.0, 500.0),
        SectionBoundary::new("about", 500.0, 400.0),
        SectionBoundary::new("skills", 900.0, 600.0),
        SectionBoundary::new("experience", 1500.0, 800.0),
        SectionBoundary::new("contact", 2300.0, 350.0),
    ]
}

fn index_of(page: &[SectionBoundary], id: Option<&str>) -> Option<usize> {
    id.and_then(|id| page.iter().position(|b| b.id == id))
}

#[test]
fn test_scenario_scroll_600_selects_about() {
    let page = vec![
        SectionBoundary::new("home", 0.0, 500.0),
        SectionBoundary::new("about", 500.0, 400.0),
        SectionBoundary::new("skills", 900.0, 600.0),
    ];
    assert_eq!(compute_active(600.0, &page, NAVBAR, DEFAULT_LOOKAHEAD), Some("about"));
}

#[test]
fn test_result_is_member_of_boundaries_or_none() {
    let page = portfolio_page();
    let mut scroll = -200.0;
    while scroll < 3000.0 {
        if let Some(id) = compute_active(scroll, &page, NAVBAR, DEFAULT_LOOKAHEAD) {
            assert!(page.iter().any(|b| b.id == id), "unknown id {id} at {scroll}");
        }
        scroll += 37.0;
    }
}

#[test]
fn test_before_first_section_nothing_is_active() {
    let page = vec![SectionBoundary::new("about", 800.0, 400.0)];
    assert_eq!(compute_active(100.0, &page, NAVBAR, DEFAULT_LOOKAHEAD), None);
    assert_eq!(compute_active(630.0, &page, NAVBAR, DEFAULT_LOOKAHEAD), Some("about"));
}

#[test]
fn test_selection_is_monotonic_in_scroll() {
    let page = portfolio_page();
    let mut previous: Option<usize> = None;
    let mut scroll = -100.0;
    while scroll < 3000.0 {
        let current = index_of(&page, compute_active(scroll, &page, NAVBAR, DEFAULT_LOOKAHEAD));
        assert!(current >= previous, "went from {previous:?} to {current:?} at {scroll}");
        previous = current;
        scroll += 13.0;
    }
    assert_eq!(previous, Some(page.len() - 1));
}

#[test]
fn test_overlapping_sections_resolve_to_furthest() {
    let page = vec![
        SectionBoundary::new("hero", 0.0, 900.0),
        SectionBoundary::new("about", 300.0, 400.0),
    ];
    assert_eq!(compute_active(200.0, &page, NAVBAR, DEFAULT_LOOKAHEAD), Some("about"));
}

#[test]
fn test_tracker_keeps_at_most_one_link_active() {
    let page = portfolio_page();
    let mut links =
        RecordingNavLinks::new(&["home", "about", "skills", "experience", "contact"]);
    let mut tracker = ActiveSectionTracker::default();

    for scroll in [0.0, 600.0, 1400.0, 2500.0, 900.0, 10.0, 2500.0] {
        let active = tracker.on_scroll(&mut links, scroll, &page, NAVBAR);
        let flagged = links.active();
        assert!(flagged.len() <= 1);
        assert_eq!(flagged.first().copied(), active.as_deref());
    }
}

#[test]
fn test_unmatched_section_leaves_no_link_active() {
    let page = vec![
        SectionBoundary::new("home", 0.0, 500.0),
        SectionBoundary::new("projects", 500.0, 500.0),
    ];
    let mut links = RecordingNavLinks::new(&["home", "about"]);
    let mut tracker = ActiveSectionTracker::default();

    tracker.on_scroll(&mut links, 0.0, &page, NAVBAR);
    assert_eq!(links.active(), vec!["home"]);

    assert_eq!(
        tracker.on_scroll(&mut links, 700.0, &page, NAVBAR).as_deref(),
        Some("projects")
    );
    assert!(links.active().is_empty());
}
