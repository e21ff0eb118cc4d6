//! Input handling and scroll state for Glide widgets

pub mod gesture_constants;
pub mod input;
pub mod scroll;

pub use input::gestures::{GestureState, PanGesture, PanGestureEvent, TapGesture};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use scroll::ScrollState;

pub mod prelude {
    pub use crate::input::gestures::{GestureState, PanGesture, PanGestureEvent, TapGesture};
    pub use crate::input::prelude::*;
    pub use crate::scroll::ScrollState;
}
