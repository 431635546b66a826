use dioxus::prelude::*;
use portfolio_types::effects::{parallax_offset, snippet_for_slot};
use portfolio_types::SiteConfig;

use crate::portfolio::content::{CODE_SNIPPETS, SNIPPET_SLOTS};

/// Drifting code lines behind the page. Reads `scroll_y` itself so only this
/// subtree re-renders while scrolling.
#[component]
pub fn CodeBackground(scroll_y: Signal<f64>, config: SiteConfig) -> Element {
    let y = scroll_y();
    let slots: Vec<(usize, &'static str, String)> = (0..SNIPPET_SLOTS)
        .filter_map(|index| {
            let snippet = snippet_for_slot(CODE_SNIPPETS, index)?;
            let style = format!(
                "top: {}%; left: {}%; transform: translateY({}px);",
                index * 12 + 4,
                (index % 3) * 30 + 3,
                parallax_offset(y, index, &config)
            );
            Some((index, snippet, style))
        })
        .collect();

    rsx! {
        div {
            class: "code-background",
            "aria-hidden": "true",
            for (index, snippet, style) in slots {
                div {
                    key: "{index}",
                    class: "code-snippet",
                    style: "{style}",
                    "{snippet}"
                }
            }
        }
    }
}
