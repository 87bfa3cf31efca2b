//! Projection of ripple state onto the overlay's inline style.

use super::geometry::{ActivationPoint, Rect};
use crate::constants::{
    CENTER_ON_ANCHOR, FINAL_OPACITY, FINAL_SCALE, INITIAL_OPACITY, INITIAL_SCALE,
};
use std::fmt::Display;

/// Style writes the ripple needs from its overlay element.
///
/// Writes are fire-and-forget. Implementations log failures rather than
/// returning them, since a missed style write only costs one frame of visuals.
pub trait OverlayStyle {
    /// Width and height, in px.
    fn set_size(&self, diameter_px: f64);
    /// `transform` and its vendor-prefixed aliases.
    fn set_transform(&self, transform: &str);
    fn set_opacity(&self, opacity: &str);
    /// Add or remove the animating marker class.
    fn set_animating(&self, animating: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    End,
}

/// A fully resolved set of overlay style values for one phase.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleStyle {
    pub phase: Phase,
    pub transform: String,
    pub opacity: &'static str,
    pub animating: bool,
}

impl RippleStyle {
    /// Tiny, semi-opaque disc at the activation point; transition disabled.
    pub fn start(point: ActivationPoint) -> Self {
        Self {
            phase: Phase::Start,
            transform: compose_transform(&translate_px(point.x, point.y), INITIAL_SCALE),
            opacity: INITIAL_OPACITY,
            animating: false,
        }
    }

    /// Unscaled, transparent disc at `offset`; transition enabled.
    pub fn end(offset: (f64, f64)) -> Self {
        Self {
            phase: Phase::End,
            transform: compose_transform(&translate_px(offset.0, offset.1), FINAL_SCALE),
            opacity: FINAL_OPACITY,
            animating: true,
        }
    }

    pub fn apply_to<O: OverlayStyle + ?Sized>(&self, overlay: &O) {
        overlay.set_transform(&self.transform);
        overlay.set_opacity(self.opacity);
        overlay.set_animating(self.animating);
    }
}

/// Where the end phase settles: the activation point, or the surface center
/// when recentering.
pub fn end_offset(point: ActivationPoint, recentering: bool, bound: &Rect) -> (f64, f64) {
    if recentering {
        bound.half_extent()
    } else {
        (f64::from(point.x), f64::from(point.y))
    }
}

#[inline]
pub fn translate_px(x: impl Display, y: impl Display) -> String {
    format!("translate({}px, {}px)", x, y)
}

#[inline]
pub fn size_px(diameter: f64) -> String {
    format!("{}px", diameter)
}

fn compose_transform(offset: &str, scale: &str) -> String {
    if scale.is_empty() {
        format!("{} {}", CENTER_ON_ANCHOR, offset)
    } else {
        format!("{} {} {}", CENTER_ON_ANCHOR, offset, scale)
    }
}
