use crate::core::RippleController;
use crate::dom::{self, SharedRipple};
use crate::events::{self, Listeners};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Live wiring for one surface. Dropping it, whether through `dispose()` or a
/// JS-side `free()`, cancels pending frames and unbinds the listeners.
struct Bound {
    ripple: SharedRipple,
    // Unbinds on drop
    _listeners: Listeners,
}

impl Drop for Bound {
    fn drop(&mut self) {
        match self.ripple.try_borrow_mut() {
            Ok(mut r) => r.dispose(),
            Err(_) => log::warn!("[ripple] dropped while busy; pending frame not cancelled"),
        }
    }
}

/// Ripple behavior bound to one surface element.
///
/// Built explicitly by the host, one per surface. Inert handles (no surface,
/// ignored events, or no overlay) bind nothing.
#[wasm_bindgen]
pub struct MaterialRipple {
    bound: Option<Bound>,
}

#[wasm_bindgen]
impl MaterialRipple {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<web::HtmlElement>) -> MaterialRipple {
        let Some(surface) = element else {
            log::debug!("[ripple] no surface element; skipping setup");
            return MaterialRipple { bound: None };
        };
        match bind(surface) {
            Ok(bound) => MaterialRipple { bound },
            Err(e) => {
                log::error!("[ripple] bind error: {:?}", e);
                MaterialRipple { bound: None }
            }
        }
    }

    /// Whether this handle listens for activations.
    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.bound.is_some()
    }

    #[wasm_bindgen(getter, js_name = pendingFrames)]
    pub fn pending_frames(&self) -> u32 {
        self.bound
            .as_ref()
            .map(|b| b.ripple.borrow().pending_frames())
            .unwrap_or(0)
    }

    /// Unbind listeners and cancel any in-flight frame. The handle becomes inert.
    pub fn dispose(&mut self) {
        if self.bound.take().is_some() {
            log::debug!("[ripple] disposed");
        }
    }
}

fn bind(surface: web::HtmlElement) -> anyhow::Result<Option<Bound>> {
    let config = dom::surface_config(&surface);
    let overlay = if config.ignore_events {
        None
    } else {
        dom::find_overlay(&surface)
    };
    let controller = RippleController::new(config, dom::surface_rect(&surface), overlay);
    let Some(active) = controller.into_active() else {
        return Ok(None);
    };
    let ripple: SharedRipple = Rc::new(RefCell::new(active));
    let listeners = events::wire_activation_listeners(&surface, &ripple)?;
    Ok(Some(Bound {
        ripple,
        _listeners: listeners,
    }))
}
