use chrono::Datelike;
use dioxus::prelude::*;

use crate::portfolio::content::OWNER_NAME;

#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| chrono::Local::now().year());

    rsx! {
        footer {
            class: "footer",
            p {
                "© "
                span { id: "copyright-year", "{year}" }
                " {OWNER_NAME}. Built with Rust and Dioxus."
            }
        }
    }
}
