use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sections::DEFAULT_LOOKAHEAD;
use crate::theme::THEME_KEY;

/// Tunables for the page. Every field has a default, so a partial JSON
/// object (or none at all) is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// localStorage key holding `"light"` or `"dark"`
    pub theme_storage_key: String,
    /// Margin below the navbar at which a section becomes active
    pub section_lookahead: f64,
    /// Scroll offset past which the navbar gets a shadow
    pub navbar_shadow_threshold: f64,
    /// Viewport widths at or below this are treated as mobile
    pub mobile_breakpoint: f64,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
    pub ripple_duration_ms: u32,
    pub pulse_duration_ms: u32,
    /// Per-entry delay when several timeline items reveal together
    pub timeline_stagger_ms: u32,
    /// Path prefix for certificate files
    pub cert_directory: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_KEY.to_string(),
            section_lookahead: DEFAULT_LOOKAHEAD,
            navbar_shadow_threshold: 50.0,
            mobile_breakpoint: 768.0,
            parallax_base_speed: 0.5,
            parallax_speed_step: 0.1,
            ripple_duration_ms: 600,
            pulse_duration_ms: 500,
            timeline_stagger_ms: 100,
            cert_directory: "certs".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"theme_storage_key": "site-theme"}"#).unwrap();
        assert_eq!(config.theme_storage_key, "site-theme");
        assert_eq!(config.section_lookahead, 100.0);
        assert_eq!(config.cert_directory, "certs");
        assert_eq!(config.timeline_stagger_ms, 100);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = SiteConfig::from_json("{\"ripple_duration_ms\": \"soon\"}").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
