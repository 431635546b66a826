//! Browser adapter tests.
//!
//! Run with: wasm-pack test --headless --firefox portfolio-ui
#![cfg(target_arch = "wasm32")]

use portfolio_types::{Theme, ThemeController, ThemeStore};
use portfolio_ui::interop::{navbar_height, observe_reveal, scroll_target_for, section_boundaries};
use portfolio_ui::portfolio::theme::{
    DocumentThemeSurface, LocalStorageThemeStore, MediaQueryPreference,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn local_storage_store_round_trips_theme() {
    let mut store = LocalStorageThemeStore::new("portfolio-test-theme");
    store.save("dark").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("dark"));

    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item("portfolio-test-theme")
        .unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[wasm_bindgen_test]
fn reads_section_geometry_in_document_order() {
    let host = mount(
        r#"<nav class="navbar" style="height: 64px; margin: 0; padding: 0;"></nav>
           <section id="t-first" style="height: 300px; margin: 0;"></section>
           <section id="t-second" style="height: 200px; margin: 0;"></section>"#,
    );

    let sections: Vec<_> = section_boundaries()
        .into_iter()
        .filter(|b| b.id.starts_with("t-"))
        .collect();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].id, "t-first");
    assert_eq!(sections[0].height, 300.0);
    assert_eq!(sections[1].top_offset - sections[0].top_offset, 300.0);
    assert_eq!(navbar_height(), 64.0);
    assert_eq!(
        scroll_target_for("t-second"),
        Some((sections[1].top_offset - 64.0).max(0.0))
    );

    host.remove();
}

#[wasm_bindgen_test]
fn initialize_writes_stored_theme_to_root_synchronously() {
    let key = "portfolio-test-initial-theme";
    let mut store = LocalStorageThemeStore::new(key);
    store.save("dark").unwrap();

    let mut controller = ThemeController::new(store, MediaQueryPreference, DocumentThemeSurface);
    assert_eq!(controller.initialize(), Theme::Dark);

    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    controller.toggle();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(controller.store().load().unwrap().as_deref(), Some("light"));

    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(key)
        .unwrap();
}

#[wasm_bindgen_test]
fn reveal_hides_cards_and_slides_timeline_entries() {
    let host = mount(
        r#"<div class="stat-card" id="reveal-stat"></div>
           <div class="experience-item" id="reveal-job"></div>"#,
    );

    observe_reveal(100).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let stat = document.get_element_by_id("reveal-stat").unwrap().class_list();
    assert!(stat.contains("reveal"));
    assert!(!stat.contains("reveal-slide"));

    let job = document.get_element_by_id("reveal-job").unwrap().class_list();
    assert!(job.contains("reveal"));
    assert!(job.contains("reveal-slide"));

    host.remove();
}
