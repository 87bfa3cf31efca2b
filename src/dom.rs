use crate::constants::{IS_ANIMATING_CLASS, RIPPLE_SELECTOR, TRANSFORM_PROPERTIES};
use crate::core::{size_px, ActiveRipple, OverlayStyle, Rect, RippleConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Active controller shared between listeners and frame callbacks.
pub type SharedRipple = Rc<RefCell<ActiveRipple<HtmlOverlay>>>;

/// Overlay element driven through its inline style and class list.
#[derive(Debug)]
pub struct HtmlOverlay {
    el: web::HtmlElement,
}

impl HtmlOverlay {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl OverlayStyle for HtmlOverlay {
    fn set_size(&self, diameter_px: f64) {
        let style = self.el.style();
        let size = size_px(diameter_px);
        for prop in ["width", "height"] {
            if let Err(e) = style.set_property(prop, &size) {
                log::warn!("[ripple] failed to set overlay {}: {:?}", prop, e);
            }
        }
    }

    fn set_transform(&self, transform: &str) {
        let style = self.el.style();
        // Unknown vendor aliases are ignored by the engine, not reported
        for prop in TRANSFORM_PROPERTIES {
            if let Err(e) = style.set_property(prop, transform) {
                log::warn!("[ripple] failed to set overlay {}: {:?}", prop, e);
            }
        }
    }

    fn set_opacity(&self, opacity: &str) {
        if let Err(e) = self.el.style().set_property("opacity", opacity) {
            log::warn!("[ripple] failed to set overlay opacity: {:?}", e);
        }
    }

    fn set_animating(&self, animating: bool) {
        let cl = self.el.class_list();
        let res = if animating {
            cl.add_1(IS_ANIMATING_CLASS)
        } else {
            cl.remove_1(IS_ANIMATING_CLASS)
        };
        if let Err(e) = res {
            log::warn!("[ripple] failed to toggle {}: {:?}", IS_ANIMATING_CLASS, e);
        }
    }
}

#[inline]
pub fn surface_rect(surface: &web::Element) -> Rect {
    let rect = surface.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[inline]
pub fn surface_config(surface: &web::Element) -> RippleConfig {
    RippleConfig::from_class_names(&surface.class_name())
}

/// First descendant marked as the ripple overlay, if any.
pub fn find_overlay(surface: &web::Element) -> Option<HtmlOverlay> {
    match surface.query_selector(RIPPLE_SELECTOR) {
        Ok(Some(el)) => match el.dyn_into::<web::HtmlElement>() {
            Ok(el) => Some(HtmlOverlay::new(el)),
            Err(_) => {
                log::warn!("[ripple] overlay is not an HTML element");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("[ripple] overlay lookup failed: {:?}", e);
            None
        }
    }
}
