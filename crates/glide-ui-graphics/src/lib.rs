//! Pure math/data shared by Glide widgets
//!
//! Geometry primitives plus the layer values a frame pass hands to the
//! renderer.

mod geometry;
mod layer;

pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::layer::GraphicsLayer;
}
