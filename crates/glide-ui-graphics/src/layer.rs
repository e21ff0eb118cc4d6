/// Per-frame visual values applied on top of a laid-out element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl GraphicsLayer {
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Uniform scale on both axes.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale_x = scale;
        self.scale_y = scale;
        self
    }

    pub fn with_scale_xy(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn with_translation(mut self, x: f32, y: f32) -> Self {
        self.translation_x = x;
        self.translation_y = y;
        self
    }

    /// Multiplies alpha, as a parent layer does for its children.
    pub fn modulate_alpha(mut self, parent_alpha: f32) -> Self {
        self.alpha *= parent_alpha;
        self
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}
