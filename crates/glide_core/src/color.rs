//! Color types and utilities

use serde::{Deserialize, Serialize};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply the existing alpha by `factor`, clamped to `[0, 1]`.
    ///
    /// Scrollbar fades use this so a translucent style color stays translucent
    /// at full opacity.
    pub fn scale_alpha(mut self, factor: f32) -> Self {
        self.a = (self.a * factor).clamp(0.0, 1.0);
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
