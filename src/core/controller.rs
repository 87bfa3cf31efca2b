//! The ripple controller: one per surface, selected once at construction as
//! either a fully wired [`ActiveRipple`] or an inert placeholder.

use super::activation::{ActivationDetector, ActivationError, RawActivation};
use super::decay::{DecayScheduler, FrameOutcome};
use super::geometry::{overlay_diameter, resolve_activation_point, ActivationPoint, Rect};
use super::lifetime::{Lifetime, LifetimeToken};
use super::style::{end_offset, OverlayStyle, RippleStyle};
use crate::constants::{HOLD_FRAMES, IGNORE_EVENTS_CLASS, RIPPLE_CENTER_CLASS};

/// Surface markers, read once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleConfig {
    /// End phase settles on the surface center instead of the activation point.
    pub recentering: bool,
    /// Build an inert controller and bind no listeners.
    pub ignore_events: bool,
    /// Frame ticks between the start and end phase.
    pub hold_frames: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            recentering: false,
            ignore_events: false,
            hold_frames: HOLD_FRAMES,
        }
    }
}

impl RippleConfig {
    /// Parse a whitespace-separated class attribute.
    pub fn from_class_names(class_attr: &str) -> Self {
        let mut config = Self::default();
        for class in class_attr.split_whitespace() {
            match class {
                RIPPLE_CENTER_CLASS => config.recentering = true,
                IGNORE_EVENTS_CLASS => config.ignore_events = true,
                _ => {}
            }
        }
        config
    }
}

/// Result of offering a raw event to an active controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// A ripple started at this point; the host must request one frame.
    Started(ActivationPoint),
    /// Compatibility mouse event following a touch; dropped.
    SuppressedCompatMouse,
    /// A ripple is already in flight; dropped without any state change.
    InFlight,
    /// The controller was disposed; dropped.
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InertReason {
    IgnoreEvents,
    MissingOverlay,
}

#[derive(Debug)]
pub enum RippleController<O> {
    Active(ActiveRipple<O>),
    Inert(InertReason),
}

impl<O: OverlayStyle> RippleController<O> {
    /// Build the controller for a surface.
    ///
    /// `overlay` is only consulted when events are not ignored. When it is
    /// present its size is fixed here and never written again.
    pub fn new(config: RippleConfig, surface: Rect, overlay: Option<O>) -> Self {
        if config.ignore_events {
            log::debug!("[ripple] surface ignores events; controller is inert");
            return RippleController::Inert(InertReason::IgnoreEvents);
        }
        match overlay {
            Some(overlay) => RippleController::Active(ActiveRipple::new(config, surface, overlay)),
            None => {
                log::debug!("[ripple] no overlay element; controller is inert");
                RippleController::Inert(InertReason::MissingOverlay)
            }
        }
    }
}

impl<O> RippleController<O> {
    #[inline]
    pub fn is_inert(&self) -> bool {
        matches!(self, RippleController::Inert(_))
    }

    pub fn active(&self) -> Option<&ActiveRipple<O>> {
        match self {
            RippleController::Active(ripple) => Some(ripple),
            RippleController::Inert(_) => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveRipple<O>> {
        match self {
            RippleController::Active(ripple) => Some(ripple),
            RippleController::Inert(_) => None,
        }
    }

    pub fn into_active(self) -> Option<ActiveRipple<O>> {
        match self {
            RippleController::Active(ripple) => Some(ripple),
            RippleController::Inert(_) => None,
        }
    }
}

/// Controller state for a surface that has an overlay and accepts events.
#[derive(Debug)]
pub struct ActiveRipple<O> {
    overlay: O,
    recentering: bool,
    diameter: f64,
    detector: ActivationDetector,
    decay: DecayScheduler,
    // Valid only while a ripple is in flight
    point: Option<ActivationPoint>,
    bound: Rect,
    lifetime: Lifetime,
}

impl<O: OverlayStyle> ActiveRipple<O> {
    fn new(config: RippleConfig, surface: Rect, overlay: O) -> Self {
        let diameter = overlay_diameter(&surface);
        overlay.set_size(diameter);
        Self {
            overlay,
            recentering: config.recentering,
            diameter,
            detector: ActivationDetector::new(),
            decay: DecayScheduler::with_hold(config.hold_frames),
            point: None,
            bound: surface,
            lifetime: Lifetime::new(),
        }
    }

    /// Offer a raw pointer event. `bound` is the surface's current rectangle.
    ///
    /// Only [`Activation::Started`] changes ripple state or writes styles; the
    /// touch/mouse filter is updated for every event on a live controller.
    pub fn handle_activation(
        &mut self,
        raw: RawActivation,
        bound: Rect,
    ) -> Result<Activation, ActivationError> {
        if !self.lifetime.is_alive() {
            return Ok(Activation::Disposed);
        }
        if !self.detector.admit(raw.kind) {
            return Ok(Activation::SuppressedCompatMouse);
        }
        if self.decay.is_active() {
            return Ok(Activation::InFlight);
        }
        let client = raw.client_point()?;
        let point = resolve_activation_point(client, &bound);
        self.point = Some(point);
        self.bound = bound;
        self.decay.arm();
        RippleStyle::start(point).apply_to(&self.overlay);
        Ok(Activation::Started(point))
    }

    /// Deliver one frame tick scheduled under `token`.
    pub fn tick(&mut self, token: &LifetimeToken) -> FrameOutcome {
        if !token.is_alive() || !self.lifetime.is_alive() {
            return FrameOutcome::Cancelled;
        }
        let outcome = self.decay.tick();
        if outcome == FrameOutcome::Finished {
            if let Some(point) = self.point.take() {
                let offset = end_offset(point, self.recentering, &self.bound);
                RippleStyle::end(offset).apply_to(&self.overlay);
            }
        }
        outcome
    }
}

impl<O> ActiveRipple<O> {
    /// Token to hand to the next scheduled frame callback.
    pub fn token(&self) -> LifetimeToken {
        self.lifetime.token()
    }

    /// End this controller's lifetime. Pending frame callbacks become no-ops.
    pub fn dispose(&mut self) {
        self.lifetime.end();
        self.point = None;
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        !self.lifetime.is_alive()
    }

    #[inline]
    pub fn pending_frames(&self) -> u32 {
        self.decay.pending_frames()
    }

    #[inline]
    pub fn activation_point(&self) -> Option<ActivationPoint> {
        self.point
    }

    #[inline]
    pub fn overlay_diameter(&self) -> f64 {
        self.diameter
    }

    #[inline]
    pub fn suppressing_mouse(&self) -> bool {
        self.detector.suppressing_mouse()
    }

    #[inline]
    pub fn recentering(&self) -> bool {
        self.recentering
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }
}
