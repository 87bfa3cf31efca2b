// Host-side tests for listener release: a callback must be removed from its
// target before it is freed, whichever way the owning handle goes away.

mod support;

use std::cell::RefCell;
use std::rc::Rc;
use support::RecordingOverlay;
use wsk_ripple::core::*;

/// Records removals; each listener is an id standing in for a JS callback.
#[derive(Clone, Default)]
struct FakeSurface {
    removed: Rc<RefCell<Vec<(PointerKind, u32)>>>,
}

impl ListenerHost for FakeSurface {
    type Listener = u32;

    fn remove_listener(&self, kind: PointerKind, listener: &u32) {
        self.removed.borrow_mut().push((kind, *listener));
    }
}

fn bound_set(surface: &FakeSurface) -> ListenerSet<FakeSurface> {
    let mut set = ListenerSet::new(surface.clone());
    set.push(PointerKind::Mouse, 1);
    set.push(PointerKind::Touch, 2);
    set
}

#[test]
fn dropping_the_set_unbinds_every_listener() {
    let surface = FakeSurface::default();
    let set = bound_set(&surface);
    assert_eq!(set.len(), 2);
    assert!(surface.removed.borrow().is_empty());

    drop(set);
    assert_eq!(
        *surface.removed.borrow(),
        vec![(PointerKind::Mouse, 1), (PointerKind::Touch, 2)]
    );
}

#[test]
fn clear_unbinds_once() {
    let surface = FakeSurface::default();
    let mut set = bound_set(&surface);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(surface.removed.borrow().len(), 2);

    // nothing left to remove when the set finally goes away
    drop(set);
    assert_eq!(surface.removed.borrow().len(), 2);
}

#[test]
fn partially_built_set_unbinds_what_it_holds() {
    let surface = FakeSurface::default();
    {
        let mut set = ListenerSet::new(surface.clone());
        set.push(PointerKind::Mouse, 7);
        // second registration failed; the set goes out of scope early
    }
    assert_eq!(*surface.removed.borrow(), vec![(PointerKind::Mouse, 7)]);
}

#[test]
fn dropping_a_live_ripple_cancels_its_frames() {
    let ripple = RippleController::new(
        RippleConfig::default(),
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Some(RecordingOverlay::new()),
    )
    .into_active()
    .expect("overlay present, events not ignored");
    let token = ripple.token();
    drop(ripple);
    assert!(!token.is_alive());
}
