// lib.rs - Root module for the demo_pages library
//
// The web application lives under `web_app`. With the `hydrate` feature the
// crate also builds the WASM entry point that attaches to server-rendered HTML.

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
