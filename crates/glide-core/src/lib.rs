//! Core runtime for Glide
//!
//! Owns the per-frame callback queue, the frame clock animations subscribe to,
//! and the observable state cells that widgets write input into.

mod frame_clock;
mod platform;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

pub(crate) type FrameCallbackId = u64;

pub mod prelude {
    pub use crate::frame_clock::FrameClock;
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::state::{MutableState, State};
}
