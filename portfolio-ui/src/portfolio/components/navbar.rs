use dioxus::prelude::*;
use portfolio_types::Theme;

use crate::portfolio::content::{NAV_ITEMS, OWNER_NAME};

#[component]
pub fn Navbar(
    active: Option<String>,
    theme: Theme,
    has_shadow: bool,
    menu_open: bool,
    on_navigate: Callback<String>,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
) -> Element {
    rsx! {
        nav {
            class: if has_shadow { "navbar scrolled" } else { "navbar" },

            a {
                class: "nav-brand",
                href: "#home",
                onclick: move |e| {
                    e.prevent_default();
                    on_navigate.call("home".to_string());
                },
                "{OWNER_NAME}"
            }

            ul {
                class: if menu_open { "nav-menu active" } else { "nav-menu" },

                for item in NAV_ITEMS.iter() {
                    li {
                        key: "{item.target}",
                        NavLink {
                            target: item.target,
                            label: item.label,
                            is_active: active.as_deref() == Some(item.target),
                            on_navigate,
                        }
                    }
                }
            }

            ThemeToggle { theme, on_toggle: on_toggle_theme }

            button {
                class: "nav-menu-btn",
                "aria-label": "Toggle navigation menu",
                "aria-expanded": if menu_open { "true" } else { "false" },
                onclick: move |_| on_toggle_menu.call(()),
                "☰"
            }
        }
    }
}

#[component]
fn NavLink(
    target: &'static str,
    label: &'static str,
    is_active: bool,
    on_navigate: Callback<String>,
) -> Element {
    rsx! {
        a {
            class: if is_active { "nav-link active" } else { "nav-link" },
            href: "#{target}",
            "aria-current": if is_active { "page" } else { "false" },
            onclick: move |e| {
                e.prevent_default();
                on_navigate.call(target.to_string());
            },
            "{label}"
        }
    }
}

#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: Callback<()>) -> Element {
    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle",
            role: "switch",
            "aria-checked": if theme.is_dark() { "true" } else { "false" },
            "aria-label": "Dark mode",
            title: "Toggle theme",
            onclick: move |_| on_toggle.call(()),
            if theme.is_dark() {
                "☀️"
            } else {
                "🌙"
            }
        }
    }
}
