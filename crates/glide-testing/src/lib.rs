//! Testing utilities for Glide
//!
//! [`FrameDriver`] owns a runtime on a simulated clock so animations can be
//! stepped deterministically; [`GestureRobot`] synthesises pointer sequences.
//!
//! ```
//! use glide_testing::{FrameDriver, GestureRobot};
//! use glide_ui_graphics::Point;
//!
//! let mut driver = FrameDriver::new();
//! driver.advance_by_millis(16);
//! assert_eq!(driver.now_millis(), 16);
//!
//! let mut robot = GestureRobot::new();
//! let events = robot.drag(Point::ZERO, Point::new(50.0, 30.0), 5);
//! assert_eq!(events.len(), 7);
//! ```

pub mod frame_driver;
pub mod robot;

pub use frame_driver::{FrameDriver, TestClock, TestScheduler, FRAME_INTERVAL_NANOS};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::frame_driver::{FrameDriver, TestClock};
    pub use crate::robot::GestureRobot;
}
