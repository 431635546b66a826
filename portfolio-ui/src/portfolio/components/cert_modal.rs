use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CertPreview {
    pub src: String,
    pub title: String,
}

/// Certificate preview overlay. Clicking the backdrop closes it; clicks on
/// the card itself don't bubble out.
#[component]
pub fn CertModal(preview: Option<CertPreview>, on_close: Callback<()>) -> Element {
    let is_open = preview.is_some();
    let (src, title) = preview
        .map(|p| (p.src, p.title))
        .unwrap_or_default();

    rsx! {
        div {
            id: "certModal",
            class: if is_open { "cert-modal show" } else { "cert-modal" },
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if is_open { "false" } else { "true" },
            "aria-labelledby": "certModalTitle",
            onclick: move |_| on_close.call(()),

            div {
                class: "cert-modal-content",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "cert-modal-header",
                    h3 { id: "certModalTitle", "{title}" }
                    button {
                        id: "certModalClose",
                        class: "cert-modal-close",
                        "aria-label": "Close certificate preview",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                if is_open {
                    if src.to_ascii_lowercase().ends_with(".pdf") {
                        iframe {
                            class: "cert-frame",
                            src: "{src}",
                            title: "{title}",
                        }
                    } else {
                        img {
                            id: "certImage",
                            class: "cert-image",
                            src: "{src}",
                            alt: "{title}",
                        }
                    }
                }
            }
        }
    }
}
