pub mod activation;
pub mod controller;
pub mod decay;
pub mod geometry;
pub mod lifetime;
pub mod listeners;
pub mod style;

pub use activation::*;
pub use controller::*;
pub use decay::*;
pub use geometry::*;
pub use lifetime::*;
pub use listeners::*;
pub use style::*;
