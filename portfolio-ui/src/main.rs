use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use portfolio_ui::Portfolio;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    log::info!("Thanks for opening the console. The source for this page is plain Rust + Dioxus.");

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Portfolio {}
    }
}
