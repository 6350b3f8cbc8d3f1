//! Research agent frontend entry point.

use research_wasm::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("research agent frontend started");

    leptos::mount::mount_to_body(App);
}
