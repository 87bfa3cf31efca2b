use crate::core::{Activation, ClientPoint, ListenerHost, ListenerSet, PointerKind, RawActivation};
use crate::dom::{self, SharedRipple};
use crate::frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type ActivationClosure = Closure<dyn FnMut(web::Event)>;

/// Listeners bound to a surface; dropping the set unbinds them.
pub type Listeners = ListenerSet<web::HtmlElement>;

impl ListenerHost for web::HtmlElement {
    type Listener = ActivationClosure;

    fn remove_listener(&self, kind: PointerKind, listener: &ActivationClosure) {
        if let Err(e) =
            self.remove_event_listener_with_callback(kind.event_type(), listener.as_ref().unchecked_ref())
        {
            log::warn!("[ripple] failed to remove {} listener: {:?}", kind, e);
        }
    }
}

const ACTIVATION_KINDS: [PointerKind; 2] = [PointerKind::Mouse, PointerKind::Touch];

/// Bind `mousedown` and `touchstart` on the surface. On failure nothing stays
/// bound.
pub fn wire_activation_listeners(
    surface: &web::HtmlElement,
    ripple: &SharedRipple,
) -> anyhow::Result<Listeners> {
    let mut listeners = Listeners::new(surface.clone());
    for kind in ACTIVATION_KINDS {
        // early return drops `listeners`, unbinding what was already added
        let closure = wire_one(surface, ripple, kind)?;
        listeners.push(kind, closure);
    }
    Ok(listeners)
}

fn wire_one(
    surface: &web::HtmlElement,
    ripple: &SharedRipple,
    kind: PointerKind,
) -> anyhow::Result<ActivationClosure> {
    let ripple = ripple.clone();
    let target = surface.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        handle_down(&ev, &target, &ripple);
    }) as Box<dyn FnMut(_)>);
    surface
        .add_event_listener_with_callback(kind.event_type(), closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
    Ok(closure)
}

fn handle_down(ev: &web::Event, surface: &web::HtmlElement, ripple: &SharedRipple) {
    let Some(raw) = decode(ev) else {
        log::debug!("[ripple] ignoring undecodable {} event", ev.type_());
        return;
    };
    let bound = dom::surface_rect(surface);
    let (result, token) = {
        let mut r = ripple.borrow_mut();
        (r.handle_activation(raw, bound), r.token())
    };
    match result {
        Ok(Activation::Started(p)) => {
            log::debug!("[ripple] {} at ({}, {})", raw.kind, p.x, p.y);
            frame::request_tick(ripple.clone(), token);
        }
        Ok(dropped) => log::trace!("[ripple] {} dropped: {:?}", raw.kind, dropped),
        Err(e) => log::warn!("[ripple] {}", e),
    }
}

/// Reduce a DOM event to a raw activation. Touch events use the first touch.
pub fn decode(ev: &web::Event) -> Option<RawActivation> {
    match PointerKind::from_event_type(&ev.type_())? {
        PointerKind::Mouse => {
            let m = ev.dyn_ref::<web::MouseEvent>()?;
            Some(RawActivation::mouse(
                f64::from(m.client_x()),
                f64::from(m.client_y()),
            ))
        }
        PointerKind::Touch => {
            let t = ev.dyn_ref::<web::TouchEvent>()?;
            let first = t
                .touches()
                .get(0)
                .map(|p| ClientPoint::new(f64::from(p.client_x()), f64::from(p.client_y())));
            Some(RawActivation::touch(first))
        }
    }
}
