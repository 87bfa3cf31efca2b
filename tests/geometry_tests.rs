// Host-side tests for surface geometry.

use wsk_ripple::core::*;

#[test]
fn resolves_point_relative_to_top_left() {
    let bound = Rect::new(30.0, 40.0, 100.0, 50.0);
    let p = resolve_activation_point(ClientPoint::new(40.0, 50.0), &bound);
    assert_eq!(p, ActivationPoint::new(10, 10));
}

#[test]
fn rounds_like_math_round() {
    assert_eq!(round_px(10.4), 10);
    assert_eq!(round_px(10.5), 11);
    assert_eq!(round_px(-2.5), -2); // halves go up, not away from zero
    assert_eq!(round_px(-2.6), -3);
    // largest double below 0.5 must not be pushed over by the addition
    assert_eq!(round_px(0.49999999999999994), 0);
    assert_eq!(round_px(-0.5), 0);

    let bound = Rect::new(0.25, 0.75, 100.0, 50.0);
    let p = resolve_activation_point(ClientPoint::new(10.75, 10.0), &bound);
    assert_eq!(p, ActivationPoint::new(11, 9));
}

#[test]
fn keyboard_origin_resolves_to_center() {
    let bound = Rect::new(30.0, 40.0, 100.0, 50.0);
    let p = resolve_activation_point(ClientPoint::new(0.0, 0.0), &bound);
    assert_eq!(p, ActivationPoint::new(50, 25));

    // odd sizes round half up
    let odd = Rect::new(5.0, 5.0, 101.0, 51.0);
    assert_eq!(surface_center(&odd), ActivationPoint::new(51, 26));
}

#[test]
fn only_exact_zero_counts_as_keyboard() {
    assert!(ClientPoint::new(0.0, 0.0).is_keyboard_origin());
    assert!(!ClientPoint::new(0.0, 3.0).is_keyboard_origin());
    assert!(!ClientPoint::new(3.0, 0.0).is_keyboard_origin());

    // A real pointer on the viewport edge is still resolved normally
    let bound = Rect::new(-10.0, 0.0, 100.0, 50.0);
    let p = resolve_activation_point(ClientPoint::new(0.0, 4.0), &bound);
    assert_eq!(p, ActivationPoint::new(10, 4));
}

#[test]
fn diameter_is_twice_the_larger_side() {
    assert_eq!(overlay_diameter(&Rect::new(0.0, 0.0, 100.0, 50.0)), 200.0);
    assert_eq!(overlay_diameter(&Rect::new(0.0, 0.0, 40.0, 90.0)), 180.0);
}

#[test]
fn diameter_covers_the_diagonal() {
    for (w, h) in [(100.0, 50.0), (1.0, 1.0), (320.0, 8.0), (33.3, 77.7)] {
        let r = Rect::new(0.0, 0.0, w, h);
        let diag = f64::sqrt(w * w + h * h);
        assert!(overlay_diameter(&r) >= diag, "{}x{}", w, h);
    }
}
