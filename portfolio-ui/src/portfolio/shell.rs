use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use portfolio_types::effects::{key_action, navbar_has_shadow, KeyAction};
use portfolio_types::{ActiveSectionTracker, ThemeController};

use crate::interop::{self, KeyPress};
use crate::portfolio::components::cert_modal::{CertModal, CertPreview};
use crate::portfolio::components::code_background::CodeBackground;
use crate::portfolio::components::footer::Footer;
use crate::portfolio::components::navbar::Navbar;
use crate::portfolio::components::sections::{About, Contact, Experience, Hero, Skills};
use crate::portfolio::content::NAV_ITEMS;
use crate::portfolio::effects;
use crate::portfolio::state::SignalNavLinks;
use crate::portfolio::styles::PAGE_STYLES;
use crate::portfolio::theme::{DocumentThemeSurface, LocalStorageThemeStore, MediaQueryPreference};

#[component]
pub fn PortfolioShell() -> Element {
    let config = use_hook(effects::load_site_config);
    let active_section = use_signal(|| None::<String>);
    let mut scroll_y = use_signal(|| 0.0_f64);
    let mut navbar_shadow = use_signal(|| false);
    let mut menu_open = use_signal(|| false);
    let cert_preview = use_signal(|| None::<CertPreview>);
    let mut listeners_installed = use_signal(|| false);

    // Both controllers are mutated only from the handlers below; the browser
    // runs each handler to completion, so a borrow never outlives one event.
    // The theme resolves here, before the first render, so `data-theme` is on
    // <html> by the first paint.
    let theme_controller = use_hook({
        let key = config.theme_storage_key.clone();
        move || {
            let mut controller = ThemeController::new(
                LocalStorageThemeStore::new(key),
                MediaQueryPreference,
                DocumentThemeSurface,
            );
            let theme = controller.initialize();
            info!("Theme initialized: {}", theme);
            Rc::new(RefCell::new(controller))
        }
    });
    // Mirrors the controller for the toggle's icon and `aria-checked`.
    let mut theme = use_signal({
        let theme_controller = theme_controller.clone();
        move || theme_controller.borrow().current()
    });
    let tracker = use_hook({
        let lookahead = config.section_lookahead;
        move || Rc::new(RefCell::new(ActiveSectionTracker::new(lookahead)))
    });

    let on_scroll = use_callback({
        let tracker = tracker.clone();
        let threshold = config.navbar_shadow_threshold;
        move |y: f64| {
            scroll_y.set(y);

            let shadow = navbar_has_shadow(y, threshold);
            if *navbar_shadow.peek() != shadow {
                navbar_shadow.set(shadow);
            }

            let mut links =
                SignalNavLinks::new(NAV_ITEMS.iter().map(|item| item.target), active_section);
            tracker.borrow_mut().on_scroll(
                &mut links,
                y,
                &interop::section_boundaries(),
                interop::navbar_height(),
            );
        }
    });

    let on_system_theme = use_callback({
        let theme_controller = theme_controller.clone();
        move |prefers_dark: bool| {
            let next = theme_controller
                .borrow_mut()
                .on_system_preference_change(prefers_dark);
            theme.set(next);
        }
    });

    let toggle_theme = use_callback({
        let theme_controller = theme_controller.clone();
        move |_: ()| {
            let next = theme_controller.borrow_mut().toggle();
            theme.set(next);
        }
    });

    let on_key = use_callback(move |press: KeyPress| -> bool {
        let modal_open = cert_preview.peek().is_some();
        let action = key_action(&press.key, press.ctrl_or_meta, modal_open);
        match action {
            KeyAction::CloseModal => effects::close_certificate(cert_preview),
            KeyAction::KeyboardNav => interop::set_keyboard_nav(true),
            KeyAction::ScrollTo(section) => effects::scroll_to_section(section),
            KeyAction::Ignore => {}
        }
        action.suppresses_default()
    });

    use_effect({
        let ripple_ms = config.ripple_duration_ms;
        let stagger_ms = config.timeline_stagger_ms;
        move || {
            if listeners_installed() {
                return;
            }
            listeners_installed.set(true);

            for (name, result) in [
                ("scroll", interop::listen_scroll(on_scroll)),
                ("system theme", interop::listen_system_theme(on_system_theme)),
                ("keyboard", interop::listen_keyboard(on_key)),
                ("ripple", interop::install_ripple_effect(ripple_ms)),
                ("reveal", interop::observe_reveal(stagger_ms)),
            ] {
                if let Err(e) = result {
                    warn!("Failed to install {} listener: {:?}", name, e);
                }
            }

            // Pick up the active section for wherever the page opened.
            on_scroll.call(interop::scroll_y());
        }
    });

    let on_navigate = use_callback(move |target: String| {
        menu_open.set(false);
        effects::scroll_to_section(&target);
    });

    let on_toggle_menu = use_callback(move |_: ()| {
        let open = *menu_open.peek();
        menu_open.set(!open);
    });

    let on_open_cert = use_callback({
        let config = config.clone();
        move |(file, title): (String, String)| {
            effects::open_certificate(&file, &title, &config, cert_preview);
        }
    });

    let on_close_cert = use_callback(move |_: ()| {
        effects::close_certificate(cert_preview);
    });

    rsx! {
        style { {PAGE_STYLES} }

        CodeBackground { scroll_y, config: config.clone() }

        Navbar {
            active: active_section(),
            theme: theme(),
            has_shadow: navbar_shadow(),
            menu_open: menu_open(),
            on_navigate,
            on_toggle_theme: toggle_theme,
            on_toggle_menu,
        }

        main {
            class: "page",
            Hero { on_navigate }
            About { on_open_cert }
            Skills {}
            Experience {}
            Contact { pulse_ms: config.pulse_duration_ms }
        }

        Footer {}

        CertModal { preview: cert_preview(), on_close: on_close_cert }
    }
}
