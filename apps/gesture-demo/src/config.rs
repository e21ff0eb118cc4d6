//! Fixed demo constants and their validation.

use std::fmt;

use glide_animation::{AnimationSpec, Easing};
use glide_ui_graphics::{Rect, Size};

pub const CARD_COUNT: usize = 10;
pub const CARD_PADDING: f32 = 50.0;
pub const TOGGLE_DURATION_MILLIS: u64 = 500;
pub const CIRCLE_SIZE: f32 = 70.0;

/// Logical size of a typical phone window.
pub const DEFAULT_WINDOW: Size = Size::new(390.0, 844.0);

/// Toggle button footprint: "Toggle" label plus 30/20 padding.
pub const TOGGLE_BUTTON_SIZE: Size = Size::new(120.0, 62.0);
pub const TOGGLE_BUTTON_BOTTOM_MARGIN: f32 = 100.0;

/// Input the circle's horizontal scale is derived from.
///
/// `TranslateY` reproduces the shipped behavior, where both axes follow the
/// vertical position (against different bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleXSource {
    #[default]
    TranslateY,
    TranslateX,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidWindow { width: f32, height: f32 },
    NoCardWidth { window_width: f32, card_padding: f32 },
    NoCards,
    InvalidCircleSize(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWindow { width, height } => {
                write!(f, "window size {width}x{height} must be positive")
            }
            ConfigError::NoCardWidth {
                window_width,
                card_padding,
            } => write!(
                f,
                "card padding {card_padding} leaves no card width in a {window_width} wide window"
            ),
            ConfigError::NoCards => write!(f, "carousel needs at least one card"),
            ConfigError::InvalidCircleSize(size) => {
                write!(f, "circle size {size} must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub window: Size,
    pub card_count: usize,
    pub card_padding: f32,
    pub toggle_duration_millis: u64,
    pub toggle_easing: Easing,
    /// Start with the carousel shown (toggle state 1, opacity 1). `true` is
    /// the demo's launch state on device; off by default so the reveal runs.
    pub initially_shown: bool,
    pub circle_size: f32,
    pub scale_x_source: ScaleXSource,
}

impl DemoConfig {
    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window = Size::new(width, height);
        self
    }

    pub fn with_card_padding(mut self, card_padding: f32) -> Self {
        self.card_padding = card_padding;
        self
    }

    pub fn with_toggle_duration_millis(mut self, millis: u64) -> Self {
        self.toggle_duration_millis = millis;
        self
    }

    pub fn with_toggle_easing(mut self, easing: Easing) -> Self {
        self.toggle_easing = easing;
        self
    }

    pub fn with_initially_shown(mut self, shown: bool) -> Self {
        self.initially_shown = shown;
        self
    }

    pub fn with_scale_x_source(mut self, source: ScaleXSource) -> Self {
        self.scale_x_source = source;
        self
    }

    /// Width of one card, which is also the snap interval.
    pub fn card_width(&self) -> f32 {
        self.window.width - self.card_padding * 2.0
    }

    /// Furthest scroll offset: last card centred.
    pub fn max_scroll_offset(&self) -> f32 {
        self.card_count.saturating_sub(1) as f32 * self.card_width()
    }

    pub fn toggle_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.toggle_duration_millis, self.toggle_easing)
    }

    pub fn toggle_button_bounds(&self) -> Rect {
        Rect {
            x: (self.window.width - TOGGLE_BUTTON_SIZE.width) / 2.0,
            y: self.window.height - TOGGLE_BUTTON_BOTTOM_MARGIN - TOGGLE_BUTTON_SIZE.height,
            width: TOGGLE_BUTTON_SIZE.width,
            height: TOGGLE_BUTTON_SIZE.height,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.window;
        if !is_positive(width) || !is_positive(height) {
            return Err(ConfigError::InvalidWindow { width, height });
        }
        if !is_positive(self.card_width()) {
            return Err(ConfigError::NoCardWidth {
                window_width: width,
                card_padding: self.card_padding,
            });
        }
        if self.card_count == 0 {
            return Err(ConfigError::NoCards);
        }
        if !is_positive(self.circle_size) {
            return Err(ConfigError::InvalidCircleSize(self.circle_size));
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            card_count: CARD_COUNT,
            card_padding: CARD_PADDING,
            toggle_duration_millis: TOGGLE_DURATION_MILLIS,
            toggle_easing: Easing::LinearEasing,
            initially_shown: false,
            circle_size: CIRCLE_SIZE,
            scale_x_source: ScaleXSource::default(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
