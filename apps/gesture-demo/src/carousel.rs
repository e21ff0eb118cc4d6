//! Horizontally paged cards that brighten and grow as they reach the centre,
//! plus a toggle that fades the whole strip in.

use glide_animation::{Animatable, AnimationSpec, Extrapolate, InterpolationConfig};
use glide_core::{MutableState, RuntimeHandle, State};
use glide_foundation::{PointerEvent, ScrollState, TapGesture};
use glide_ui_graphics::GraphicsLayer;

use crate::config::DemoConfig;

const OPACITY_POINTS: [f32; 3] = [0.5, 1.0, 0.5];
const SCALE_POINTS: [f32; 3] = [0.9, 1.0, 0.9];

/// Visibility flag behind the carousel fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Hidden = 0,
    Shown = 1,
}

impl ToggleState {
    pub fn opacity(self) -> f32 {
        match self {
            ToggleState::Hidden => 0.0,
            ToggleState::Shown => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub opacity: f32,
    pub scale: f32,
}

impl CardStyle {
    pub fn layer(&self) -> GraphicsLayer {
        GraphicsLayer::default()
            .with_alpha(self.opacity)
            .with_scale(self.scale)
    }
}

pub struct Carousel {
    card_width: f32,
    card_count: usize,
    scroll: ScrollState,
    toggle_state: MutableState<ToggleState>,
    opacity: Animatable<f32>,
    toggle_spec: AnimationSpec,
    toggle_tap: TapGesture,
}

impl Carousel {
    /// `config` must already be validated.
    pub fn new(config: &DemoConfig, runtime: RuntimeHandle) -> Self {
        let initial = if config.initially_shown {
            ToggleState::Shown
        } else {
            ToggleState::Hidden
        };
        let mut scroll = ScrollState::new(0.0, runtime.clone());
        scroll.set_max_value(config.max_scroll_offset());
        Self {
            card_width: config.card_width(),
            card_count: config.card_count,
            scroll,
            toggle_state: MutableState::with_runtime(initial, runtime.clone()),
            opacity: Animatable::new(initial.opacity(), runtime),
            toggle_spec: config.toggle_spec(),
            toggle_tap: TapGesture::new(),
        }
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Current horizontal scroll offset.
    pub fn offset(&self) -> f32 {
        self.scroll.value()
    }

    pub fn offset_state(&self) -> State<f32> {
        self.scroll.state()
    }

    /// Record the offset reported by the scroll source.
    pub fn on_scroll(&self, offset: f32) {
        self.scroll.dispatch_offset(offset);
    }

    /// Snap to the nearest card once the scroll source goes idle.
    pub fn settle_scroll(&self) -> f32 {
        let snapped = self.scroll.snap_to_interval(self.card_width);
        log::debug!("carousel settled on card {}", self.focused_index());
        snapped
    }

    /// Card closest to the centre of the viewport.
    pub fn focused_index(&self) -> usize {
        self.scroll
            .nearest_page(self.card_width)
            .min(self.card_count.saturating_sub(1))
    }

    /// Opacity and scale of card `index` at the current offset.
    ///
    /// Both peak when the offset equals `index * card_width` and fall to their
    /// floor one card width either side, holding there beyond.
    pub fn card_style(&self, index: usize) -> CardStyle {
        let center = index as f32 * self.card_width;
        let input = [center - self.card_width, center, center + self.card_width];
        let offset = self.scroll.value();
        CardStyle {
            opacity: InterpolationConfig::from_points(input, OPACITY_POINTS)
                .extrapolate(Extrapolate::Clamp)
                .apply(offset),
            scale: InterpolationConfig::from_points(input, SCALE_POINTS)
                .extrapolate(Extrapolate::Clamp)
                .apply(offset),
        }
    }

    pub fn card_styles(&self) -> Vec<CardStyle> {
        (0..self.card_count)
            .map(|index| self.card_style(index))
            .collect()
    }

    pub fn toggle_state(&self) -> ToggleState {
        self.toggle_state.get()
    }

    /// Opacity of the whole strip.
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn is_fading(&self) -> bool {
        self.opacity.is_running()
    }

    /// Reveal the carousel. Only `Hidden → Shown` exists; once shown this
    /// does nothing. Returns whether the state flipped.
    pub fn toggle(&mut self) -> bool {
        if self.toggle_state.get() == ToggleState::Shown {
            log::debug!("toggle ignored: carousel already shown");
            return false;
        }
        self.toggle_state.set_value(ToggleState::Shown);
        self.opacity
            .animate_to(ToggleState::Shown.opacity(), self.toggle_spec);
        log::debug!(
            "carousel fading from {:.3} to 1 over {}ms",
            self.opacity.value(),
            self.toggle_spec.duration_millis
        );
        true
    }

    /// Pointer input for the toggle button. A completed tap toggles.
    pub fn on_toggle_pointer(&mut self, event: &PointerEvent) -> bool {
        if self.toggle_tap.on_pointer_event(event) {
            self.toggle()
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
