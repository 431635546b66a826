//! Single-page portfolio: navbar, content sections and page effects.
//!
//! Theme and scroll-spy state live in `portfolio_types`; this module owns
//! the browser adapters and the component tree around them.

use dioxus::prelude::*;

pub mod components;
mod content;
mod effects;
mod shell;
pub mod state;
mod styles;
pub mod theme;

pub use shell::PortfolioShell;

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        PortfolioShell {}
    }
}
