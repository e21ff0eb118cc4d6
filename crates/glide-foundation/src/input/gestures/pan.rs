//! Single-recogniser pan gesture.
//!
//! Turns raw pointer input into translation events relative to the press
//! point. State flow: `Undetermined → Began → Active → {Ended, Cancelled}`,
//! or `Began → Failed` when the press never travels past the touch slop or
//! more pointers than allowed go down before activation.

use glide_ui_graphics::Point;
use smallvec::SmallVec;

use crate::gesture_constants::{DEFAULT_MAX_POINTERS, DRAG_THRESHOLD};
use crate::input::{PointerEvent, PointerEventKind, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Undetermined,
    Began,
    Active,
    Ended,
    Cancelled,
    Failed,
}

impl GestureState {
    pub fn is_active(self) -> bool {
        self == GestureState::Active
    }

    /// Ended, cancelled or failed.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GestureState::Ended | GestureState::Cancelled | GestureState::Failed
        )
    }
}

/// Translation since the press, tagged with the recogniser state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGestureEvent {
    pub translation_x: f32,
    pub translation_y: f32,
    pub state: GestureState,
}

impl PanGestureEvent {
    pub fn new(translation_x: f32, translation_y: f32, state: GestureState) -> Self {
        Self {
            translation_x,
            translation_y,
            state,
        }
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translation_x, self.translation_y)
    }
}

#[derive(Debug, Clone)]
pub struct PanGesture {
    max_pointers: usize,
    touch_slop: f32,
    pointers_down: SmallVec<[PointerId; 4]>,
    tracked: Option<PointerId>,
    origin: Point,
    translation: Point,
    state: GestureState,
}

impl PanGesture {
    pub fn new() -> Self {
        Self {
            max_pointers: DEFAULT_MAX_POINTERS,
            touch_slop: DRAG_THRESHOLD,
            pointers_down: SmallVec::new(),
            tracked: None,
            origin: Point::ZERO,
            translation: Point::ZERO,
            state: GestureState::Undetermined,
        }
    }

    pub fn with_max_pointers(mut self, max_pointers: usize) -> Self {
        self.max_pointers = max_pointers.max(1);
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop.max(0.0);
        self
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Forget every pointer and return to `Undetermined`.
    pub fn reset(&mut self) {
        self.pointers_down.clear();
        self.tracked = None;
        self.origin = Point::ZERO;
        self.translation = Point::ZERO;
        self.state = GestureState::Undetermined;
    }

    /// Feed one pointer event. Returns the event to publish, if any.
    ///
    /// Events for the tracked pointer are consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(event),
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        if !self.pointers_down.contains(&event.id) {
            self.pointers_down.push(event.id);
        }

        if self.tracked.is_none() {
            if self.pointers_down.len() > 1 {
                // Leftover pointers from a rejected gesture; wait for all to lift.
                return None;
            }
            self.tracked = Some(event.id);
            self.origin = event.position;
            self.translation = Point::ZERO;
            event.consume();
            return Some(self.transition(GestureState::Began));
        }

        if self.pointers_down.len() > self.max_pointers {
            let next = if self.state.is_active() {
                GestureState::Cancelled
            } else {
                GestureState::Failed
            };
            log::debug!(
                "pan rejected: {} pointers down, max {}",
                self.pointers_down.len(),
                self.max_pointers
            );
            self.tracked = None;
            return Some(self.transition(next));
        }
        None
    }

    fn on_move(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        if self.tracked != Some(event.id) {
            return None;
        }
        event.consume();
        self.translation = event.position - self.origin;
        match self.state {
            GestureState::Began => {
                if Point::ZERO.distance_to(self.translation) > self.touch_slop {
                    Some(self.transition(GestureState::Active))
                } else {
                    None
                }
            }
            GestureState::Active => Some(self.event(GestureState::Active)),
            _ => None,
        }
    }

    fn on_up(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        self.pointers_down.retain(|id| *id != event.id);
        if self.tracked != Some(event.id) {
            return None;
        }
        event.consume();
        self.tracked = None;
        if self.state.is_active() {
            self.translation = event.position - self.origin;
            Some(self.transition(GestureState::Ended))
        } else {
            Some(self.transition(GestureState::Failed))
        }
    }

    fn on_cancel(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        self.pointers_down.retain(|id| *id != event.id);
        if self.tracked != Some(event.id) {
            return None;
        }
        event.consume();
        self.tracked = None;
        Some(self.transition(GestureState::Cancelled))
    }

    fn transition(&mut self, next: GestureState) -> PanGestureEvent {
        log::debug!("pan {:?} -> {:?}", self.state, next);
        self.state = next;
        self.event(next)
    }

    fn event(&self, state: GestureState) -> PanGestureEvent {
        PanGestureEvent::new(self.translation.x, self.translation.y, state)
    }
}

impl Default for PanGesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
