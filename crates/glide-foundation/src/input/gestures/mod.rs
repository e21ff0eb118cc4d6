pub mod pan;
pub mod tap;

pub use pan::{GestureState, PanGesture, PanGestureEvent};
pub use tap::TapGesture;
