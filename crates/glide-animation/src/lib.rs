//! Animation system for Glide
//!
//! Time-based tweens driven by the runtime's frame clock, easing curves, and
//! the piecewise-linear `interpolate` used to map signals onto style values.

mod animation;
mod interpolation;

pub use animation::*;
pub use interpolation::*;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, Easing};
    pub use crate::interpolation::{interpolate, Extrapolate, InterpolationConfig};
}
