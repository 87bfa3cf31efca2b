//! Surface geometry: bounding rectangles, activation points and overlay sizing.
//!
//! Everything here is pure and platform-agnostic. The DOM layer converts a
//! `DomRect` into a [`Rect`] and hands it over on every activation, since the
//! surface may have moved or resized since the last one.

/// Bounding rectangle of a surface in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Unrounded center relative to the rect's own top-left corner.
    #[inline]
    pub fn half_extent(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Raw client coordinates carried by a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Synthetic clicks fired from the keyboard report exactly (0, 0).
    #[inline]
    pub fn is_keyboard_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Activation point in whole pixels, relative to the surface's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivationPoint {
    pub x: i32,
    pub y: i32,
}

impl ActivationPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rounds like the browser's `Math.round`: halves go toward positive infinity.
#[inline]
pub fn round_px(v: f64) -> i32 {
    // no intermediate `v + 0.5`: it rounds 0.49999999999999994 up
    let f = v.floor();
    if v - f >= 0.5 {
        f as i32 + 1
    } else {
        f as i32
    }
}

/// Resolve client coordinates into a surface-relative activation point.
///
/// A keyboard-origin point resolves to the surface's rounded center.
pub fn resolve_activation_point(client: ClientPoint, bound: &Rect) -> ActivationPoint {
    if client.is_keyboard_origin() {
        return surface_center(bound);
    }
    ActivationPoint::new(
        round_px(client.x - bound.left),
        round_px(client.y - bound.top),
    )
}

#[inline]
pub fn surface_center(bound: &Rect) -> ActivationPoint {
    let (hw, hh) = bound.half_extent();
    ActivationPoint::new(round_px(hw), round_px(hh))
}

/// Diameter that lets the scaled-up overlay cover the whole surface from any
/// activation point: twice the larger side.
#[inline]
pub fn overlay_diameter(bound: &Rect) -> f64 {
    bound.width.max(bound.height) * 2.0
}
