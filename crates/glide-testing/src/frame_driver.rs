use std::cell::Cell;
use std::rc::Rc;

use glide_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler};

/// Nominal 60 Hz frame interval.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct TestClock {
    now_nanos: Cell<u64>,
}

impl TestClock {
    pub fn advance(&self, nanos: u64) {
        self.now_nanos.set(self.now_nanos.get().saturating_add(nanos));
    }
}

impl Clock for TestClock {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.now_nanos.get()
    }

    fn elapsed_nanos(&self, since: u64) -> u64 {
        self.now_nanos.get().saturating_sub(since)
    }
}

/// Scheduler that records frame requests instead of acting on them.
#[derive(Debug, Default)]
pub struct TestScheduler {
    requests: Cell<usize>,
}

impl TestScheduler {
    pub fn frame_requests(&self) -> usize {
        self.requests.get()
    }
}

impl RuntimeScheduler for TestScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

/// Runtime on a simulated clock.
pub struct FrameDriver {
    runtime: Runtime,
    scheduler: Rc<TestScheduler>,
    clock: TestClock,
    frames: usize,
}

impl FrameDriver {
    pub fn new() -> Self {
        let scheduler = Rc::new(TestScheduler::default());
        Self {
            runtime: Runtime::new(scheduler.clone()),
            scheduler,
            clock: TestClock::default(),
            frames: 0,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn scheduler(&self) -> &TestScheduler {
        &self.scheduler
    }

    pub fn now_nanos(&self) -> u64 {
        self.clock.now()
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now() / 1_000_000
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Run one frame at the current time without moving the clock.
    pub fn frame(&mut self) {
        self.frames += 1;
        self.runtime.drain_frame_callbacks(self.clock.now());
    }

    pub fn advance_by_nanos(&mut self, nanos: u64) {
        self.clock.advance(nanos);
        self.frame();
    }

    /// Move the clock by `millis` and run a single frame at the new time.
    pub fn advance_by_millis(&mut self, millis: u64) {
        self.advance_by_nanos(millis.saturating_mul(1_000_000));
    }

    /// Run `count` frames at the nominal frame interval.
    pub fn run_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.advance_by_nanos(FRAME_INTERVAL_NANOS);
        }
    }

    /// Run frames until no callback is pending or `max_frames` is reached.
    /// Returns the number of frames run.
    pub fn pump_until_idle(&mut self, max_frames: usize) -> usize {
        let mut ran = 0;
        while self.runtime.has_frame_callbacks() && ran < max_frames {
            self.advance_by_nanos(FRAME_INTERVAL_NANOS);
            ran += 1;
        }
        if self.runtime.has_frame_callbacks() {
            log::warn!("still busy after {max_frames} frames");
        }
        ran
    }

    pub fn is_idle(&self) -> bool {
        !self.runtime.has_frame_callbacks()
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/frame_driver_tests.rs"]
mod tests;
