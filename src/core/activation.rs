//! Pointer activation decoding and touch/mouse de-duplication.
//!
//! A `touchstart` is followed by a compatibility `mousedown` for the same
//! physical press. The detector drops exactly one mouse event after each touch
//! so a tap produces a single ripple.

use super::geometry::ClientPoint;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// DOM event type this kind is registered under.
    pub fn event_type(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mousedown",
            PointerKind::Touch => "touchstart",
        }
    }

    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "mousedown" => Some(PointerKind::Mouse),
            "touchstart" => Some(PointerKind::Touch),
            _ => None,
        }
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

/// A raw activation event reduced to what the ripple needs.
///
/// `client` holds the mouse position, or the first touch point for touch
/// events. It is `None` when a touch event arrives with an empty touch list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawActivation {
    pub kind: PointerKind,
    pub client: Option<ClientPoint>,
}

impl RawActivation {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self {
            kind: PointerKind::Mouse,
            client: Some(ClientPoint::new(client_x, client_y)),
        }
    }

    pub fn touch(first_touch: Option<ClientPoint>) -> Self {
        Self {
            kind: PointerKind::Touch,
            client: first_touch,
        }
    }

    /// Client coordinates, or an error for an event that carried none.
    pub fn client_point(&self) -> Result<ClientPoint, ActivationError> {
        self.client
            .ok_or(ActivationError::MissingCoordinates { kind: self.kind })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    #[error("{kind} event carried no coordinates")]
    MissingCoordinates { kind: PointerKind },
}

/// Tracks whether the next mouse activation is a touch compatibility event.
#[derive(Clone, Debug, Default)]
pub struct ActivationDetector {
    suppress_next_mouse: bool,
}

impl ActivationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the compatibility filter for one raw event.
    ///
    /// Touch is always admitted and arms the filter. A mouse event is dropped
    /// (returning `false`) when the filter is armed, which also disarms it.
    pub fn admit(&mut self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Touch => {
                self.suppress_next_mouse = true;
                true
            }
            PointerKind::Mouse if self.suppress_next_mouse => {
                self.suppress_next_mouse = false;
                false
            }
            PointerKind::Mouse => true,
        }
    }

    #[inline]
    pub fn suppressing_mouse(&self) -> bool {
        self.suppress_next_mouse
    }
}
