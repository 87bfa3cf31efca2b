// Host-side tests for activation decoding and touch/mouse de-duplication.

use wsk_ripple::core::*;

#[test]
fn touch_arms_filter_and_next_mouse_is_dropped() {
    let mut d = ActivationDetector::new();
    assert!(!d.suppressing_mouse());

    assert!(d.admit(PointerKind::Touch));
    assert!(d.suppressing_mouse());

    assert!(!d.admit(PointerKind::Mouse));
    assert!(!d.suppressing_mouse());

    // second mouse without an intervening touch goes through
    assert!(d.admit(PointerKind::Mouse));
}

#[test]
fn touch_is_never_suppressed() {
    let mut d = ActivationDetector::new();
    assert!(d.admit(PointerKind::Touch));
    assert!(d.admit(PointerKind::Touch));
    assert!(d.suppressing_mouse());
    // a single mouse event consumes the filter
    assert!(!d.admit(PointerKind::Mouse));
    assert!(d.admit(PointerKind::Mouse));
}

#[test]
fn plain_mouse_stream_is_untouched() {
    let mut d = ActivationDetector::new();
    for _ in 0..3 {
        assert!(d.admit(PointerKind::Mouse));
        assert!(!d.suppressing_mouse());
    }
}

#[test]
fn event_types_map_both_ways() {
    assert_eq!(PointerKind::Mouse.event_type(), "mousedown");
    assert_eq!(PointerKind::Touch.event_type(), "touchstart");
    assert_eq!(
        PointerKind::from_event_type("touchstart"),
        Some(PointerKind::Touch)
    );
    assert_eq!(
        PointerKind::from_event_type("mousedown"),
        Some(PointerKind::Mouse)
    );
    assert_eq!(PointerKind::from_event_type("click"), None);
}

#[test]
fn touch_without_points_has_no_coordinates() {
    let raw = RawActivation::touch(None);
    let err = raw.client_point().unwrap_err();
    assert_eq!(
        err,
        ActivationError::MissingCoordinates {
            kind: PointerKind::Touch
        }
    );
    assert_eq!(err.to_string(), "touchstart event carried no coordinates");
}

#[test]
fn mouse_carries_its_client_point() {
    let raw = RawActivation::mouse(12.0, 34.0);
    assert_eq!(raw.kind, PointerKind::Mouse);
    assert_eq!(raw.client_point(), Ok(ClientPoint::new(12.0, 34.0)));
}
