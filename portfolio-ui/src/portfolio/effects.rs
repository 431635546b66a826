use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use dioxus_logger::tracing::{debug, warn};
use gloo_timers::future::TimeoutFuture;
use portfolio_types::effects::{cert_action, CertAction};
use portfolio_types::SiteConfig;

use crate::interop;
use crate::portfolio::components::cert_modal::CertPreview;

const SITE_CONFIG_ID: &str = "site-config";

/// Config from the page's inline JSON block, or defaults.
pub fn load_site_config() -> SiteConfig {
    let Some(raw) = interop::inline_text(SITE_CONFIG_ID) else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring #{SITE_CONFIG_ID}, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// Scroll so the section sits just below the sticky navbar.
pub fn scroll_to_section(id: &str) {
    match interop::scroll_target_for(id) {
        Some(top) => interop::smooth_scroll_to(top),
        None => debug!("No section #{id} to scroll to"),
    }
}

pub fn open_certificate(
    file: &str,
    title: &str,
    config: &SiteConfig,
    mut preview: Signal<Option<CertPreview>>,
) {
    match cert_action(file, title, interop::viewport_width(), config) {
        CertAction::Preview { src, title } => {
            preview.set(Some(CertPreview { src, title }));
            interop::set_body_scroll_locked(true);
        }
        CertAction::OpenInNewTab { url } => interop::open_in_new_tab(&url),
    }
}

pub fn close_certificate(mut preview: Signal<Option<CertPreview>>) {
    preview.set(None);
    interop::set_body_scroll_locked(false);
}

/// Set `slot` for `duration_ms`, then clear it unless something else took it.
pub async fn flash<T: PartialEq + Clone + 'static>(
    mut slot: Signal<Option<T>>,
    value: T,
    duration_ms: u32,
) {
    slot.set(Some(value.clone()));
    TimeoutFuture::new(duration_ms).await;
    if *slot.peek() == Some(value) {
        slot.set(None);
    }
}
