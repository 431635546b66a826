//! Thin wrappers over the browser: layout reads, scrolling and
//! page-lifetime event listeners.

use dioxus::prelude::Callback;
use gloo_timers::future::TimeoutFuture;
use portfolio_types::effects::{
    reveal_delay_ms, ripple_geometry, scroll_target_top, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, TIMELINE_SELECTOR,
};
use portfolio_types::SectionBoundary;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";
const REVEAL_CLASS: &str = "reveal";
const REVEAL_SLIDE_CLASS: &str = "reveal-slide";
const VISIBLE_CLASS: &str = "visible";

/// A keydown as the page cares about it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl_or_meta: bool,
}

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Rendered height of the sticky `.navbar`, 0 if it isn't mounted yet.
pub fn navbar_height() -> f64 {
    document()
        .ok()
        .and_then(|doc| doc.query_selector(".navbar").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// Live geometry of every `section[id]`, in document order.
pub fn section_boundaries() -> Vec<SectionBoundary> {
    let Ok(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBoundary::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
        })
        .collect()
}

pub fn section_offset_top(id: &str) -> Option<f64> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| f64::from(el.offset_top()))
}

/// Scroll offset that lands section `id` just below the navbar.
pub fn scroll_target_for(id: &str) -> Option<f64> {
    section_offset_top(id).map(|top| scroll_target_top(top, navbar_height()))
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("failed to open {url}: {e:?}");
        }
    }
}

/// Stop the page behind a modal from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().ok().and_then(|doc| doc.body()) else {
        return;
    };
    let overflow = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", overflow);
}

pub fn set_keyboard_nav(enabled: bool) {
    let Some(body) = document().ok().and_then(|doc| doc.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if enabled {
        classes.add_1(KEYBOARD_NAV_CLASS)
    } else {
        classes.remove_1(KEYBOARD_NAV_CLASS)
    };
}

/// `None` when `matchMedia` is unsupported.
pub fn system_prefers_dark() -> Option<bool> {
    window()?
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
}

/// Text of an inline element, e.g. a `<script type="application/json">` block.
pub fn inline_text(id: &str) -> Option<String> {
    document().ok()?.get_element_by_id(id)?.text_content()
}

// Listeners below live as long as the page, so their closures are leaked
// with `forget()` once registered.

/// Forward window scroll offsets to `on_scroll`.
pub fn listen_scroll(on_scroll: Callback<f64>) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;

    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        on_scroll.call(scroll_y());
    }) as Box<dyn FnMut(web_sys::Event)>);

    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Forward OS dark-mode preference changes to `on_change`.
pub fn listen_system_theme(on_change: Callback<bool>) -> Result<(), JsValue> {
    let mql = window()
        .ok_or_else(|| JsValue::from_str("no global `window` exists"))?
        .match_media(DARK_SCHEME_QUERY)?
        .ok_or_else(|| JsValue::from_str("matchMedia unsupported"))?;

    let closure = Closure::wrap(Box::new(move |e: web_sys::MediaQueryListEvent| {
        on_change.call(e.matches());
    }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

    mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Document-level keydown plus the mousedown that leaves keyboard-nav mode.
/// When `on_key` returns `true` the browser default is suppressed.
pub fn listen_keyboard(on_key: Callback<KeyPress, bool>) -> Result<(), JsValue> {
    let document = document()?;

    let keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        let press = KeyPress {
            key: e.key(),
            ctrl_or_meta: e.ctrl_key() || e.meta_key(),
        };
        if on_key.call(press) {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    let mousedown = Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
        set_keyboard_nav(false);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
    keydown.forget();
    mousedown.forget();
    Ok(())
}

/// One delegated click listener that drops a ripple into any `.btn`.
pub fn install_ripple_effect(duration_ms: u32) -> Result<(), JsValue> {
    let document = document()?;
    let doc = document.clone();

    let closure = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let button = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".btn").ok().flatten());
        let Some(button) = button else {
            return;
        };
        if let Err(err) = spawn_ripple(&doc, &button, &e, duration_ms) {
            log::warn!("ripple failed: {err:?}");
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Hide sections and cards until they scroll into view, then fade them up.
/// Timeline entries slide in from the left, `stagger_ms` apart when several
/// enter together.
pub fn observe_reveal(stagger_ms: u32) -> Result<(), JsValue> {
    let document = document()?;
    watch_reveal(&document, REVEAL_SELECTOR, &[REVEAL_CLASS], Some(REVEAL_ROOT_MARGIN), 0)?;
    watch_reveal(
        &document,
        TIMELINE_SELECTOR,
        &[REVEAL_CLASS, REVEAL_SLIDE_CLASS],
        None,
        stagger_ms,
    )
}

fn watch_reveal(
    document: &Document,
    selector: &str,
    hidden_classes: &[&str],
    root_margin: Option<&str>,
    stagger_ms: u32,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for (position, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                // Revealed once; scrolling back up leaves it visible.
                let target = entry.target();
                observer.unobserve(&target);

                let delay = reveal_delay_ms(position, stagger_ms);
                if delay == 0 {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                } else {
                    wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(delay).await;
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                    });
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;

    let nodes = document.query_selector_all(selector)?;
    for element in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        for class in hidden_classes {
            element.class_list().add_1(class)?;
        }
        observer.observe(&element);
    }

    closure.forget();
    Ok(())
}

fn spawn_ripple(
    document: &Document,
    button: &web_sys::Element,
    e: &web_sys::MouseEvent,
    duration_ms: u32,
) -> Result<(), JsValue> {
    let rect = button.get_bounding_client_rect();
    let ripple = ripple_geometry(
        f64::from(e.client_x()),
        f64::from(e.client_y()),
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    );

    let span = document.create_element("span")?;
    span.set_class_name("ripple");
    span.set_attribute(
        "style",
        &format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = ripple.size,
            left = ripple.left,
            top = ripple.top
        ),
    )?;
    button.append_child(&span)?;

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        span.remove();
    });
    Ok(())
}
