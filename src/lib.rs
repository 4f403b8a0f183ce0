mod app;
pub mod color;
pub mod config;
pub mod contact;
mod dom_helpers;
pub mod error;
pub mod field;
pub mod nav;
pub mod particle;
pub mod random;
pub mod renderer;
pub mod reveal;
pub mod skills;
pub mod surface;
pub mod tilt;
pub mod typing;
mod utils;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use crate::app::{attach_background, BackgroundHandle};
pub use crate::config::FieldConfig;
pub use crate::error::WebError;
pub use crate::field::{Connection, ParticleField};
pub use crate::particle::Particle;
pub use crate::random::RandomSource;
pub use crate::surface::Surface;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

/// Starts the diamond particle background on the canvas with id `canvas_id`,
/// sized to the viewport. Does nothing if the page has no such canvas.
#[wasm_bindgen]
pub fn start_background(canvas_id: &str) -> Result<(), JsValue> {
    app::start_background(canvas_id).map_err(JsValue::from)
}

/// Cycles `phrases` through the first element matching `selector` with a
/// typewriter effect. Non-string entries are ignored.
#[wasm_bindgen]
pub fn start_typing(selector: &str, phrases: js_sys::Array) -> Result<(), JsValue> {
    let phrases: Vec<String> = phrases.iter().filter_map(|p| p.as_string()).collect();
    app::start_typing(selector, phrases).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn start_card_tilt(selector: &str) -> Result<(), JsValue> {
    app::start_card_tilt(selector).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn start_floating(selector: &str) -> Result<(), JsValue> {
    app::start_floating(selector).map_err(JsValue::from)
}

/// Hamburger toggle, link scrolling and the navbar scroll shade.
#[wasm_bindgen]
pub fn start_navigation() -> Result<(), JsValue> {
    app::start_navigation().map_err(JsValue::from)
}

/// Tags titles, cards and items with entrance classes and marks them
/// `visible` as they scroll into view.
#[wasm_bindgen]
pub fn start_scroll_reveal() -> Result<(), JsValue> {
    app::start_scroll_reveal().map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn start_skills() -> Result<(), JsValue> {
    app::start_skills().map_err(JsValue::from)
}

/// Turns the form with id `form_id` into a local-only mock: submitting
/// clears it and flashes a confirmation on its submit button.
#[wasm_bindgen]
pub fn start_contact_form(form_id: &str) -> Result<(), JsValue> {
    app::start_contact_form(form_id).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn start_lazy_images() -> Result<(), JsValue> {
    app::start_lazy_images().map_err(JsValue::from)
}

// Scoped console.time/timeEnd pair, shows up in the browser profiler
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
