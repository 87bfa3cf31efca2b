use crate::core::{FrameOutcome, LifetimeToken};
use crate::dom::SharedRipple;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Schedule one ripple tick on the next animation frame.
///
/// The callback owns `token`; if the controller is disposed before the frame
/// fires, the tick is dropped without touching the overlay.
pub fn request_tick(ripple: SharedRipple, token: LifetimeToken) {
    let Some(window) = web::window() else {
        log::warn!("[frame] no window; ripple cannot finish");
        return;
    };
    let callback = Closure::once_into_js(move || on_tick(ripple, token));
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>()) {
        log::error!("[frame] requestAnimationFrame failed: {:?}", e);
    }
}

fn on_tick(ripple: SharedRipple, token: LifetimeToken) {
    let outcome = ripple.borrow_mut().tick(&token);
    match outcome {
        FrameOutcome::Continue => request_tick(ripple, token),
        FrameOutcome::Finished => log::trace!("[frame] ripple end phase"),
        FrameOutcome::Idle => {}
        FrameOutcome::Cancelled => log::debug!("[frame] dropped tick for disposed ripple"),
    }
}
