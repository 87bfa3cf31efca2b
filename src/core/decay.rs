//! Frame-counted hold between the start and end phase of a ripple.
//!
//! The counter only spans a single frame by default: the visible grow and fade
//! come from the CSS transition on the overlay, not from per-frame updates. The
//! frame just gives the browser a chance to commit the start style first.

use crate::constants::HOLD_FRAMES;

/// What the host should do after delivering a frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Still holding; request another frame.
    Continue,
    /// Hold expired and the end phase was rendered. The controller is idle.
    Finished,
    /// Tick arrived while idle; nothing was done.
    Idle,
    /// Tick arrived after the controller was disposed; nothing was done.
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct DecayScheduler {
    hold_frames: u32,
    pending_frames: u32,
}

impl Default for DecayScheduler {
    fn default() -> Self {
        Self::with_hold(HOLD_FRAMES)
    }
}

impl DecayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold for `frames` ticks before the end phase; at least one.
    pub fn with_hold(frames: u32) -> Self {
        Self {
            hold_frames: frames.max(1),
            pending_frames: 0,
        }
    }

    #[inline]
    pub fn hold_frames(&self) -> u32 {
        self.hold_frames
    }

    #[inline]
    pub fn pending_frames(&self) -> u32 {
        self.pending_frames
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pending_frames > 0
    }

    /// Idle -> Active. The caller is expected to have checked `is_active`.
    pub fn arm(&mut self) {
        self.pending_frames = self.hold_frames;
    }

    /// Consume one frame. Returns `Finished` on the tick that empties the
    /// counter; the caller then renders the end phase.
    pub fn tick(&mut self) -> FrameOutcome {
        if self.pending_frames == 0 {
            return FrameOutcome::Idle;
        }
        self.pending_frames -= 1;
        if self.pending_frames == 0 {
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }
}
