use dioxus::prelude::*;
use portfolio_types::effects::skill_tag_emphasis;

use crate::portfolio::content::{
    ABOUT_PARAGRAPHS, CERTIFICATES, CONTACT_LINKS, EXPERIENCE, OWNER_NAME, OWNER_ROLE,
    OWNER_TAGLINE, PROFILE_IMAGE, SKILL_CATEGORIES, STATS,
};
use crate::portfolio::effects;

#[component]
pub fn Hero(on_navigate: Callback<String>) -> Element {
    rsx! {
        section {
            id: "home",
            class: "section hero",

            div {
                class: "hero-text",
                h1 { "{OWNER_NAME}" }
                p { class: "hero-role", "{OWNER_ROLE}" }
                p { class: "hero-tagline", "{OWNER_TAGLINE}" }

                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_navigate.call("experience".to_string()),
                        "View experience"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_navigate.call("contact".to_string()),
                        "Get in touch"
                    }
                }
            }

            div {
                class: "hero-visual",
                img {
                    class: "profile-image",
                    src: PROFILE_IMAGE,
                    alt: "{OWNER_NAME}",
                    "loading": "lazy",
                }
                div { class: "floating-card", "🦀" }
                div { class: "floating-card", "⚡" }
            }
        }
    }
}

#[component]
pub fn About(on_open_cert: Callback<(String, String)>) -> Element {
    rsx! {
        section {
            id: "about",
            class: "section",
            h2 { class: "section-title", "About" }

            for paragraph in ABOUT_PARAGRAPHS.iter() {
                p { class: "about-text", "{paragraph}" }
            }

            div {
                class: "stats",
                for stat in STATS.iter() {
                    div {
                        class: "stat-card",
                        span { class: "stat-value", "{stat.value}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }

            div {
                class: "achievements",
                for cert in CERTIFICATES.iter() {
                    span {
                        class: "achievement-badge",
                        role: "button",
                        tabindex: "0",
                        onclick: move |_| {
                            on_open_cert.call((cert.file.to_string(), cert.title.to_string()));
                        },
                        onkeydown: move |e| {
                            let activates = match e.key() {
                                Key::Enter => true,
                                Key::Character(c) => c == " ",
                                _ => false,
                            };
                            if activates {
                                e.prevent_default();
                                on_open_cert.call((cert.file.to_string(), cert.title.to_string()));
                            }
                        },
                        "🏅 {cert.title}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: "skills",
            class: "section",
            h2 { class: "section-title", "Skills" }

            div {
                class: "skills-grid",
                for category in SKILL_CATEGORIES.iter() {
                    div {
                        class: "skill-category",
                        h3 { "{category.title}" }
                        SkillTags { tags: category.tags }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillTags(tags: &'static [&'static str]) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let on_hover = use_callback(move |index: Option<usize>| hovered.set(index));

    rsx! {
        div {
            class: "skill-tags",
            for (index, tag) in tags.iter().enumerate() {
                SkillTag { tag, index, hovered: hovered(), on_hover }
            }
        }
    }
}

#[component]
fn SkillTag(
    tag: &'static str,
    index: usize,
    hovered: Option<usize>,
    on_hover: Callback<Option<usize>>,
) -> Element {
    let emphasis = skill_tag_emphasis(hovered, index);

    rsx! {
        span {
            class: "skill-tag",
            style: "transform: scale({emphasis.scale}); opacity: {emphasis.opacity};",
            onmouseenter: move |_| on_hover.call(Some(index)),
            onmouseleave: move |_| on_hover.call(None),
            "{tag}"
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        section {
            id: "experience",
            class: "section",
            h2 { class: "section-title", "Experience" }

            div {
                class: "timeline",
                for job in EXPERIENCE.iter() {
                    div {
                        class: "experience-item",
                        div {
                            class: "experience-header",
                            h3 { "{job.role}" }
                            span { class: "experience-period", "{job.period}" }
                        }
                        p { class: "experience-company", "{job.company}" }
                        p { "{job.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact(pulse_ms: u32) -> Element {
    let pulsing = use_signal(|| None::<usize>);

    rsx! {
        section {
            id: "contact",
            class: "section",
            h2 { class: "section-title", "Contact" }
            p { "Open to staff-level backend roles and architecture consulting." }

            div {
                class: "contact-links",
                for (index, link) in CONTACT_LINKS.iter().enumerate() {
                    a {
                        class: if pulsing() == Some(index) { "contact-link pulse" } else { "contact-link" },
                        href: link.href,
                        target: if link.href.starts_with("http") { "_blank" } else { "_self" },
                        rel: "noopener",
                        // Default navigation (mailto, new tab) proceeds; the pulse is cosmetic.
                        onclick: move |_| {
                            spawn(effects::flash(pulsing, index, pulse_ms));
                        },
                        span { class: "contact-icon", "{link.icon}" }
                        span { "{link.label}" }
                    }
                }
            }
        }
    }
}
