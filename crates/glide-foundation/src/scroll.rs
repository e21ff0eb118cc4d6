//! Scroll position owned by a scrollable container.
//!
//! The offset is written by the scroll source (raw, once per frame) and read
//! by whatever derives visuals from it. The container bounds only apply to
//! the relative/programmatic paths.

use glide_core::{MutableState, RuntimeHandle, State};

#[derive(Clone, Debug)]
pub struct ScrollState {
    offset: MutableState<f32>,
    max_value: f32,
}

impl ScrollState {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        Self {
            offset: MutableState::with_runtime(initial, runtime),
            max_value: f32::INFINITY,
        }
    }

    pub fn value(&self) -> f32 {
        self.offset.get()
    }

    pub fn state(&self) -> State<f32> {
        self.offset.as_state()
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Largest reachable offset, usually content extent minus viewport extent.
    pub fn set_max_value(&mut self, max_value: f32) {
        self.max_value = max_value.max(0.0);
    }

    /// Store an offset reported by the scroll source as-is.
    pub fn dispatch_offset(&self, offset: f32) {
        log::trace!("scroll offset {offset}");
        self.offset.set_value(offset);
    }

    /// Move by `delta`, clamped to the bounds. Returns the distance consumed.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let current = self.value();
        let next = self.clamp(current + delta);
        self.offset.set_value(next);
        next - current
    }

    pub fn scroll_to(&self, offset: f32) {
        self.offset.set_value(self.clamp(offset));
    }

    /// Index of the page of width `interval` nearest to the current offset.
    pub fn nearest_page(&self, interval: f32) -> usize {
        if interval <= 0.0 {
            return 0;
        }
        (self.clamp(self.value()) / interval).round().max(0.0) as usize
    }

    /// Snap to the nearest multiple of `interval` inside the bounds and
    /// return the new offset.
    pub fn snap_to_interval(&self, interval: f32) -> f32 {
        if interval <= 0.0 {
            return self.value();
        }
        let snapped = self.clamp(self.nearest_page(interval) as f32 * interval);
        self.offset.set_value(snapped);
        snapped
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_value)
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
