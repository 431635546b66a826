//! Decisions behind the decorative page effects.
//!
//! The browser side only reads geometry and writes styles; the arithmetic
//! lives here.

use crate::config::SiteConfig;

/// Ctrl/Meta + key shortcuts to sections.
pub const SECTION_SHORTCUTS: [(&str, &str); 5] = [
    ("h", "home"),
    ("a", "about"),
    ("s", "skills"),
    ("e", "experience"),
    ("c", "contact"),
];

/// Scroll offset that puts a section's top just under the sticky navbar.
pub fn scroll_target_top(section_top: f64, navbar_height: f64) -> f64 {
    (section_top - navbar_height).max(0.0)
}

pub fn shortcut_target(key: &str, ctrl_or_meta: bool) -> Option<&'static str> {
    if !ctrl_or_meta {
        return None;
    }
    SECTION_SHORTCUTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, section)| *section)
}

/// What a document-level keydown should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseModal,
    KeyboardNav,
    ScrollTo(&'static str),
    Ignore,
}

impl KeyAction {
    /// Shortcuts replace the browser's own Ctrl/Meta binding.
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyAction::ScrollTo(_))
    }
}

pub fn key_action(key: &str, ctrl_or_meta: bool, modal_open: bool) -> KeyAction {
    match key {
        "Escape" if modal_open => KeyAction::CloseModal,
        "Escape" => KeyAction::Ignore,
        "Tab" => KeyAction::KeyboardNav,
        key => shortcut_target(key, ctrl_or_meta).map_or(KeyAction::Ignore, KeyAction::ScrollTo),
    }
}

pub fn navbar_has_shadow(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical offset of the `index`-th background snippet; deeper slots move faster.
pub fn parallax_offset(scroll_y: f64, index: usize, config: &SiteConfig) -> f64 {
    scroll_y * (config.parallax_base_speed + index as f64 * config.parallax_speed_step)
}

/// Snippets repeat cyclically across slots.
pub fn snippet_for_slot<'a>(snippets: &[&'a str], index: usize) -> Option<&'a str> {
    if snippets.is_empty() {
        return None;
    }
    Some(snippets[index % snippets.len()])
}

/// Elements that fade up into place the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = "section, .skill-category, .stat-card";
/// Timeline entries slide in from the left instead, staggered.
pub const TIMELINE_SELECTOR: &str = ".experience-item";
/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Reveal a little before the element's bottom edge clears the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Delay before the `position`-th element of one intersection batch reveals.
pub fn reveal_delay_ms(position: usize, stagger_ms: u32) -> u32 {
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// A square ripple, as wide as the larger button side, centred on the click.
pub fn ripple_geometry(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> RippleGeometry {
    let size = rect_width.max(rect_height);
    RippleGeometry {
        size,
        left: client_x - rect_left - size / 2.0,
        top: client_y - rect_top - size / 2.0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertAction {
    Preview { src: String, title: String },
    OpenInNewTab { url: String },
}

/// PDFs can't be previewed inline on small screens; hand them to the browser.
pub fn cert_action(file: &str, title: &str, viewport_width: f64, config: &SiteConfig) -> CertAction {
    let url = format!("{}/{}", config.cert_directory.trim_end_matches('/'), file);
    let is_pdf = file
        .rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf && viewport_width <= config.mobile_breakpoint {
        CertAction::OpenInNewTab { url }
    } else {
        CertAction::Preview {
            src: url,
            title: title.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillEmphasis {
    pub scale: f64,
    pub opacity: f64,
}

/// Hovering one tag lifts it and dims its siblings.
pub fn skill_tag_emphasis(hovered: Option<usize>, index: usize) -> SkillEmphasis {
    match hovered {
        None => SkillEmphasis {
            scale: 1.0,
            opacity: 1.0,
        },
        Some(h) if h == index => SkillEmphasis {
            scale: 1.05,
            opacity: 1.0,
        },
        Some(_) => SkillEmphasis {
            scale: 0.95,
            opacity: 0.5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_clamps_at_top() {
        assert_eq!(scroll_target_top(500.0, 70.0), 430.0);
        assert_eq!(scroll_target_top(20.0, 70.0), 0.0);
    }

    #[test]
    fn test_shortcuts_need_modifier() {
        assert_eq!(shortcut_target("s", true), Some("skills"));
        assert_eq!(shortcut_target("s", false), None);
        assert_eq!(shortcut_target("x", true), None);
    }

    #[test]
    fn test_key_action_escape_needs_open_modal() {
        assert_eq!(key_action("Escape", false, true), KeyAction::CloseModal);
        assert_eq!(key_action("Escape", false, false), KeyAction::Ignore);
        assert!(!KeyAction::CloseModal.suppresses_default());
    }

    #[test]
    fn test_key_action_tab_enters_keyboard_nav() {
        assert_eq!(key_action("Tab", false, false), KeyAction::KeyboardNav);
        assert_eq!(key_action("Tab", false, true), KeyAction::KeyboardNav);
        assert!(!KeyAction::KeyboardNav.suppresses_default());
    }

    #[test]
    fn test_key_action_shortcut_scrolls_and_suppresses_default() {
        let action = key_action("e", true, false);
        assert_eq!(action, KeyAction::ScrollTo("experience"));
        assert!(action.suppresses_default());
    }

    #[test]
    fn test_key_action_ignores_bare_letters_and_unknown_keys() {
        assert_eq!(key_action("e", false, false), KeyAction::Ignore);
        assert_eq!(key_action("x", true, false), KeyAction::Ignore);
        assert_eq!(key_action("Enter", false, true), KeyAction::Ignore);
        assert!(!KeyAction::Ignore.suppresses_default());
    }

    #[test]
    fn test_navbar_shadow_threshold_is_exclusive() {
        assert!(!navbar_has_shadow(50.0, 50.0));
        assert!(navbar_has_shadow(51.0, 50.0));
    }

    #[test]
    fn test_parallax_speeds_up_per_slot() {
        let config = SiteConfig::default();
        assert_eq!(parallax_offset(100.0, 0, &config), 50.0);
        assert!((parallax_offset(100.0, 2, &config) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_snippets_wrap_around() {
        let snippets = ["a", "b", "c"];
        assert_eq!(snippet_for_slot(&snippets, 4), Some("b"));
        assert_eq!(snippet_for_slot(&[], 0), None);
    }

    #[test]
    fn test_reveal_delay_staggers_by_position() {
        assert_eq!(reveal_delay_ms(0, 100), 0);
        assert_eq!(reveal_delay_ms(3, 100), 300);
        assert_eq!(reveal_delay_ms(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn test_ripple_is_centred_on_click() {
        let ripple = ripple_geometry(150.0, 220.0, 100.0, 200.0, 120.0, 40.0);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, -10.0);
        assert_eq!(ripple.top, -40.0);
    }

    #[test]
    fn test_cert_pdf_on_mobile_opens_tab() {
        let config = SiteConfig::default();
        assert_eq!(
            cert_action("aws.PDF", "AWS", 400.0, &config),
            CertAction::OpenInNewTab {
                url: "certs/aws.PDF".to_string()
            }
        );
        assert_eq!(
            cert_action("aws.pdf", " AWS ", 1280.0, &config),
            CertAction::Preview {
                src: "certs/aws.pdf".to_string(),
                title: "AWS".to_string()
            }
        );
        assert!(matches!(
            cert_action("scrum.png", "Scrum", 400.0, &config),
            CertAction::Preview { .. }
        ));
    }

    #[test]
    fn test_skill_emphasis() {
        assert_eq!(skill_tag_emphasis(None, 3).opacity, 1.0);
        assert_eq!(skill_tag_emphasis(Some(3), 3).scale, 1.05);
        assert_eq!(skill_tag_emphasis(Some(1), 3).opacity, 0.5);
    }
}
