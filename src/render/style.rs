//! Draw styles.
//!
//! Every drawing call on a [`Canvas`](super::Canvas) reads its paint from the
//! canvas' current [`DrawStyle`]. Styles are plain `Copy` values, so scoping
//! a change is a matter of saving and restoring one struct.

use crate::color::Rgba;

/// How rectangle coordinates are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectMode {
    /// `(x, y)` is the top-left corner.
    #[default]
    Corner,
    /// `(x, y)` is the center.
    Center,
}

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Soft external glow drawn beneath filled shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Blur radius in pixels (the Gaussian sigma is half of this).
    pub radius: f32,
    /// Glow tint. Its alpha is further multiplied by the fill alpha.
    pub color: Rgba,
}

impl Glow {
    /// Create a new glow.
    #[must_use]
    pub const fn new(radius: f32, color: Rgba) -> Self {
        Self { radius, color }
    }
}

/// Font settings for text drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Nominal font size in pixels.
    pub size: f32,
    /// Double-strike glyphs for a heavier weight.
    pub bold: bool,
    /// Horizontal alignment.
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { size: 12.0, bold: false, align: TextAlign::Left }
    }
}

/// Complete paint state for a drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    /// Fill color, or `None` to skip filling.
    pub fill: Option<Rgba>,
    /// Stroke color, or `None` to skip outlines.
    pub stroke: Option<Rgba>,
    /// Stroke thickness in pixels.
    pub stroke_weight: f32,
    /// Rectangle anchor interpretation.
    pub rect_mode: RectMode,
    /// Glow applied beneath filled shapes.
    pub glow: Option<Glow>,
    /// Font settings.
    pub text: TextStyle,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            fill: Some(Rgba::WHITE),
            stroke: None,
            stroke_weight: 1.0,
            rect_mode: RectMode::Corner,
            glow: None,
            text: TextStyle::default(),
        }
    }
}

impl DrawStyle {
    /// Set the fill color.
    #[must_use]
    pub fn fill(mut self, color: Rgba) -> Self {
        self.fill = Some(color);
        self
    }

    /// Disable filling.
    #[must_use]
    pub fn no_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub fn stroke(mut self, color: Rgba) -> Self {
        self.stroke = Some(color);
        self
    }

    /// Disable outlines.
    #[must_use]
    pub fn no_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// Set the stroke thickness.
    #[must_use]
    pub fn stroke_weight(mut self, weight: f32) -> Self {
        self.stroke_weight = weight.max(0.0);
        self
    }

    /// Set the rectangle anchor mode.
    #[must_use]
    pub fn rect_mode(mut self, mode: RectMode) -> Self {
        self.rect_mode = mode;
        self
    }

    /// Enable a glow beneath filled shapes.
    #[must_use]
    pub fn glow(mut self, radius: f32, color: Rgba) -> Self {
        self.glow = Some(Glow::new(radius, color));
        self
    }

    /// Set the font size.
    #[must_use]
    pub fn text_size(mut self, size: f32) -> Self {
        self.text.size = size;
        self
    }

    /// Set bold or regular weight.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.text.bold = bold;
        self
    }

    /// Set the text alignment.
    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.text.align = align;
        self
    }
}
