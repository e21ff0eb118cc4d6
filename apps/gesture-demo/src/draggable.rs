//! A circle moved by a single-pointer pan, scaled by where it sits on screen.
//!
//! While the pan is active the circle renders at `position + drag` without
//! touching `position`. The drag is folded into `position` exactly once, on
//! the edge out of `Active`.

use glide_animation::{Extrapolate, InterpolationConfig};
use glide_core::{MutableState, RuntimeHandle};
use glide_foundation::{GestureState, PanGesture, PanGestureEvent, PointerEvent};
use glide_ui_graphics::{GraphicsLayer, Point, Rect, Size};

use crate::config::{DemoConfig, ScaleXSource};

const MAX_SCALE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl CircleTransform {
    pub fn translation(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    pub fn layer(&self) -> GraphicsLayer {
        GraphicsLayer::default()
            .with_translation(self.translate_x, self.translate_y)
            .with_scale_xy(self.scale_x, self.scale_y)
    }
}

pub struct DraggableCircle {
    size: f32,
    scale_x_source: ScaleXSource,
    drag: MutableState<Point>,
    position: MutableState<Point>,
    gesture_state: MutableState<GestureState>,
    pan: PanGesture,
    scale_x: InterpolationConfig,
    scale_y: InterpolationConfig,
    commits: usize,
}

impl DraggableCircle {
    /// Starts centred in the window. `config` must already be validated.
    pub fn new(config: &DemoConfig, runtime: RuntimeHandle) -> Self {
        let window = config.window;
        Self {
            size: config.circle_size,
            scale_x_source: config.scale_x_source,
            drag: MutableState::with_runtime(Point::ZERO, runtime.clone()),
            position: MutableState::with_runtime(window.center(), runtime.clone()),
            gesture_state: MutableState::with_runtime(GestureState::Undetermined, runtime),
            pan: PanGesture::new(),
            scale_x: InterpolationConfig::from_points([0.0, window.width], [0.0, MAX_SCALE])
                .extrapolate(Extrapolate::Clamp),
            scale_y: InterpolationConfig::from_points([0.0, window.height], [0.0, MAX_SCALE])
                .extrapolate(Extrapolate::Clamp),
            commits: 0,
        }
    }

    /// Committed position, excluding any drag in progress.
    pub fn position(&self) -> Point {
        self.position.get()
    }

    pub fn drag(&self) -> Point {
        self.drag.get()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture_state.get()
    }

    /// Number of drags folded into the position so far.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// Raw pointer input; runs the pan recogniser and applies what it reports.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<PanGestureEvent> {
        let gesture = self.pan.on_pointer_event(event)?;
        self.on_gesture_event(gesture);
        Some(gesture)
    }

    /// Store the reported translation and state, committing on the way out of
    /// `Active`.
    pub fn on_gesture_event(&mut self, event: PanGestureEvent) {
        let previous = self.gesture_state.get();
        self.drag.set_value(event.translation());
        self.gesture_state.set_value(event.state);
        if previous != event.state {
            self.on_state_changed(previous, event.state);
        }
    }

    fn on_state_changed(&mut self, from: GestureState, to: GestureState) {
        log::debug!("circle gesture {from:?} -> {to:?}");
        if from.is_active() {
            self.commit();
        } else if to.is_finished() {
            log::debug!("gesture {to:?} without activation, position unchanged");
        }
    }

    fn commit(&mut self) {
        let drag = self.drag.get();
        self.position.update(|position| *position += drag);
        self.drag.set_value(Point::ZERO);
        self.commits += 1;
        log::debug!(
            "circle committed drag ({:.1}, {:.1}) -> {:?}",
            drag.x,
            drag.y,
            self.position.get()
        );
    }

    /// Translation and scale for this frame. Reads only.
    pub fn compute_transform(&self) -> CircleTransform {
        let position = self.position.get();
        let translation = if self.gesture_state.get().is_active() {
            position + self.drag.get()
        } else {
            position
        };
        let scale_x_input = match self.scale_x_source {
            ScaleXSource::TranslateY => translation.y,
            ScaleXSource::TranslateX => translation.x,
        };
        CircleTransform {
            translate_x: translation.x,
            translate_y: translation.y,
            scale_x: self.scale_x.apply(scale_x_input),
            scale_y: self.scale_y.apply(translation.y),
        }
    }

    /// On-screen bounds of the scaled circle, centred on its translation.
    pub fn bounds(&self) -> Rect {
        let transform = self.compute_transform();
        Rect::from_center_size(
            transform.translation(),
            Size::new(self.size * transform.scale_x, self.size * transform.scale_y),
        )
    }
}

#[cfg(test)]
#[path = "tests/draggable_tests.rs"]
mod tests;
