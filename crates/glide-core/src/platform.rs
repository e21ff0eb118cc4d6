//! Platform abstraction traits for Glide runtime services.
//!
//! The host decides when frames happen and where time comes from; the runtime
//! only asks for a frame and consumes the timestamp it is handed.

/// Schedules frames for the Glide runtime.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the frame loop.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
