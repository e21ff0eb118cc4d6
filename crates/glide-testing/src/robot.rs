//! Synthesised pointer input.
//!
//! The robot hands back events instead of dispatching them, so the same
//! sequence can be routed through a single recogniser or a whole app.

use glide_foundation::{PointerEvent, PointerEventKind, PointerId};
use glide_ui_graphics::Point;

#[derive(Debug, Default)]
pub struct GestureRobot {
    next_id: PointerId,
    pressed: Option<(PointerId, Point)>,
}

impl GestureRobot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position of the held pointer, if any.
    pub fn position(&self) -> Option<Point> {
        self.pressed.map(|(_, position)| position)
    }

    pub fn press(&mut self, at: Point) -> PointerEvent {
        self.next_id += 1;
        let id = self.next_id;
        self.pressed = Some((id, at));
        PointerEvent::new(PointerEventKind::Down, at).with_id(id)
    }

    /// Extra pointer going down while another is held. It is not tracked.
    pub fn press_extra(&mut self, at: Point) -> PointerEvent {
        self.next_id += 1;
        PointerEvent::new(PointerEventKind::Down, at).with_id(self.next_id)
    }

    /// Move the held pointer to `to`. Without a held pointer this is a hover
    /// move for pointer 0.
    pub fn move_to(&mut self, to: Point) -> PointerEvent {
        let id = match &mut self.pressed {
            Some((id, position)) => {
                *position = to;
                *id
            }
            None => 0,
        };
        PointerEvent::new(PointerEventKind::Move, to).with_id(id)
    }

    /// Move the held pointer by `delta` in `steps` equal increments.
    pub fn move_by(&mut self, delta: Point, steps: usize) -> Vec<PointerEvent> {
        let start = self.position().unwrap_or(Point::ZERO);
        let steps = steps.max(1);
        (1..=steps)
            .map(|step| {
                let fraction = step as f32 / steps as f32;
                self.move_to(Point::new(
                    start.x + delta.x * fraction,
                    start.y + delta.y * fraction,
                ))
            })
            .collect()
    }

    pub fn release(&mut self) -> PointerEvent {
        let (id, at) = self.pressed.take().unwrap_or((0, Point::ZERO));
        PointerEvent::new(PointerEventKind::Up, at).with_id(id)
    }

    pub fn cancel(&mut self) -> PointerEvent {
        let (id, at) = self.pressed.take().unwrap_or((0, Point::ZERO));
        PointerEvent::new(PointerEventKind::Cancel, at).with_id(id)
    }

    /// Press at `from`, move by `delta` in `steps`, release.
    pub fn drag(&mut self, from: Point, delta: Point, steps: usize) -> Vec<PointerEvent> {
        let mut events = vec![self.press(from)];
        events.extend(self.move_by(delta, steps));
        events.push(self.release());
        events
    }

    pub fn tap(&mut self, at: Point) -> Vec<PointerEvent> {
        vec![self.press(at), self.release()]
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
