//! Both widgets mounted side by side, with pointer routing and the per-frame
//! evaluation pass.

use glide_core::Runtime;
use glide_foundation::{PointerEvent, PointerEventKind, PointerId};
use glide_ui_graphics::GraphicsLayer;

use crate::carousel::{CardStyle, Carousel};
use crate::config::{ConfigError, DemoConfig};
use crate::draggable::{CircleTransform, DraggableCircle};

/// Style values for one frame, read after animations have advanced.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStyles {
    pub carousel_opacity: f32,
    pub cards: Vec<CardStyle>,
    pub circle: CircleTransform,
}

impl FrameStyles {
    /// Card layers with the strip opacity folded in.
    pub fn card_layers(&self) -> Vec<GraphicsLayer> {
        self.cards
            .iter()
            .map(|card| card.layer().modulate_alpha(self.carousel_opacity))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    ToggleButton,
    Circle,
}

pub struct DemoApp {
    config: DemoConfig,
    runtime: Runtime,
    carousel: Carousel,
    circle: DraggableCircle,
    captures: Vec<(PointerId, Target)>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Result<Self, ConfigError> {
        Self::with_runtime(config, Runtime::default())
    }

    /// Mount on an existing runtime, e.g. one driven by a simulated clock.
    pub fn with_runtime(config: DemoConfig, runtime: Runtime) -> Result<Self, ConfigError> {
        config.validate()?;
        let handle = runtime.handle();
        let carousel = Carousel::new(&config, handle.clone());
        let circle = DraggableCircle::new(&config, handle);
        log::info!(
            "mounted {} cards of width {} in a {}x{} window",
            config.card_count,
            config.card_width(),
            config.window.width,
            config.window.height
        );
        Ok(Self {
            config,
            runtime,
            carousel,
            circle,
            captures: Vec::new(),
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn circle(&self) -> &DraggableCircle {
        &self.circle
    }

    pub fn circle_mut(&mut self) -> &mut DraggableCircle {
        &mut self.circle
    }

    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }

    pub fn is_animating(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    pub fn on_scroll(&self, offset: f32) {
        self.carousel.on_scroll(offset);
    }

    /// Route a pointer event to the widget that owns its pointer.
    ///
    /// A press is hit-tested (toggle button first, then the circle). While
    /// the circle holds a pointer, further presses go to it too, so its
    /// recogniser sees extra fingers.
    pub fn dispatch_pointer(&mut self, event: &PointerEvent) {
        let target = match event.kind {
            PointerEventKind::Down => {
                let target = self.hit_test(event);
                if let Some(target) = target {
                    self.captures.push((event.id, target));
                }
                target
            }
            _ => self.capture_for(event.id),
        };

        match target {
            Some(Target::ToggleButton) => {
                self.carousel.on_toggle_pointer(event);
            }
            Some(Target::Circle) => {
                self.circle.on_pointer_event(event);
            }
            None => log::trace!("pointer {} {:?} hit nothing", event.id, event.kind),
        }

        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.captures.retain(|(id, _)| *id != event.id);
        }
    }

    fn hit_test(&self, event: &PointerEvent) -> Option<Target> {
        if self
            .captures
            .iter()
            .any(|(_, target)| *target == Target::Circle)
        {
            return Some(Target::Circle);
        }
        let (x, y) = (event.position.x, event.position.y);
        if self.config.toggle_button_bounds().contains(x, y) {
            Some(Target::ToggleButton)
        } else if self.circle.bounds().contains(x, y) {
            Some(Target::Circle)
        } else {
            None
        }
    }

    fn capture_for(&self, id: PointerId) -> Option<Target> {
        self.captures
            .iter()
            .find(|(captured, _)| *captured == id)
            .map(|(_, target)| *target)
    }

    /// Derive every style value from the current signals.
    pub fn frame_styles(&self) -> FrameStyles {
        FrameStyles {
            carousel_opacity: self.carousel.opacity(),
            cards: self.carousel.card_styles(),
            circle: self.circle.compute_transform(),
        }
    }

    /// Advance animations to `frame_time_nanos`, then read all styles.
    pub fn render_frame(&mut self, frame_time_nanos: u64) -> FrameStyles {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
        let styles = self.frame_styles();
        log::trace!(
            "frame {}ms: opacity {:.3}, focus {}, circle ({:.1}, {:.1})",
            frame_time_nanos / 1_000_000,
            styles.carousel_opacity,
            self.carousel.focused_index(),
            styles.circle.translate_x,
            styles.circle.translate_y
        );
        styles
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
