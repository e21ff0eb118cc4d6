//! Tap gesture recogniser.

use glide_ui_graphics::Point;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::input::{PointerEvent, PointerEventKind, PointerId};

/// Recognises a press and release that stays within the touch slop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapGesture {
    slop: f32,
    pressed: Option<(PointerId, Point)>,
}

impl TapGesture {
    pub fn new() -> Self {
        Self {
            slop: DRAG_THRESHOLD,
            pressed: None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn reset(&mut self) {
        self.pressed = None;
    }

    /// Returns true when `event` completes a tap.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if self.pressed.is_none() {
                    self.pressed = Some((event.id, event.position));
                    event.consume();
                }
                false
            }
            PointerEventKind::Move => {
                if let Some((id, origin)) = self.pressed {
                    if id == event.id && origin.distance_to(event.position) > self.slop {
                        self.pressed = None;
                    }
                }
                false
            }
            PointerEventKind::Up => match self.pressed {
                Some((id, origin)) if id == event.id => {
                    self.pressed = None;
                    event.consume();
                    origin.distance_to(event.position) <= self.slop
                }
                _ => false,
            },
            PointerEventKind::Cancel => {
                if matches!(self.pressed, Some((id, _)) if id == event.id) {
                    self.pressed = None;
                }
                false
            }
        }
    }
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tap_tests.rs"]
mod tests;
