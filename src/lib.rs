//! Ripple feedback for interactive surfaces.
//!
//! The state machine lives in [`core`] and builds on any target; the DOM
//! bindings are compiled for `wasm32` only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use binding::MaterialRipple;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wsk-ripple ready");
    Ok(())
}
