pub mod pointer;

pub use pointer::{wire_activation_listeners, Listeners};
