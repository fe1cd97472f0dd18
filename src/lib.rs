//! Client-side behavior for a static portfolio page: theme toggle, navigation
//! affordances, scroll reveals, the hero particle canvas, a typewriter tagline
//! and animated stat counters.
//!
//! The logic modules build on every target so they can be tested on the
//! host; the DOM wiring under [`wasm`] only exists for `wasm32`.

pub mod config;
pub mod counter;
pub mod frame;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod theme;
pub mod typewriter;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod back_to_top;
    pub mod canvas;
    pub mod counters;
    pub mod dom;
    pub mod nav;
    pub mod observer;
    pub mod reveal;
    pub mod theme;
    pub mod typewriter;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let components: [(&str, Result<(), JsValue>); 7] = [
            ("theme", theme::init(&document)),
            ("nav", nav::init(&window, &document)),
            ("reveal", reveal::init(&document)),
            ("back-to-top", back_to_top::init(&window, &document)),
            ("canvas", canvas::init(&window, &document)),
            ("typewriter", typewriter::init(&window, &document)),
            ("counters", counters::init(&window, &document)),
        ];
        let started: Vec<&str> = components
            .into_iter()
            .filter_map(|(name, result)| dom::isolate(name, result).then_some(name))
            .collect();
        web_sys::console::log_1(&format!("page effects ready: {}", started.join(", ")).into());
        Ok(())
    }
}
