//! Class names and style literals shared by the ripple core and the DOM layer.
//!
//! The stylesheet that gives these classes meaning (transition timing, the
//! circular overlay shape) lives with the host theme.

// Surface markers, read once when a controller is built
pub const RIPPLE_CENTER_CLASS: &str = "wsk-ripple--center";
pub const IGNORE_EVENTS_CLASS: &str = "wsk-js-ripple-effect--ignore-events";

// Overlay lookup and state marker
pub const RIPPLE_SELECTOR: &str = ".wsk-ripple";
pub const IS_ANIMATING_CLASS: &str = "is-animating";

// Style literals
pub const INITIAL_SCALE: &str = "scale(0.0001, 0.0001)";
pub const FINAL_SCALE: &str = "";
pub const INITIAL_OPACITY: &str = "0.4";
pub const FINAL_OPACITY: &str = "0";
pub const CENTER_ON_ANCHOR: &str = "translate(-50%, -50%)";

// Number of frame ticks between the start and end phase
pub const HOLD_FRAMES: u32 = 1;

// Transform property plus the vendor aliases written alongside it
pub const TRANSFORM_PROPERTIES: [&str; 3] = ["-webkit-transform", "-ms-transform", "transform"];
