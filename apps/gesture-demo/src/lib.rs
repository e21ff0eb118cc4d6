//! Gesture demo: a scroll-driven card carousel and a draggable circle.

pub mod app;
pub mod carousel;
pub mod config;
pub mod draggable;

pub use app::{DemoApp, FrameStyles};
pub use carousel::{CardStyle, Carousel, ToggleState};
pub use config::{ConfigError, DemoConfig, ScaleXSource};
pub use draggable::{CircleTransform, DraggableCircle};
