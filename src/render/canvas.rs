//! Style-scoped drawing surface.
//!
//! [`Canvas`] pairs a [`Framebuffer`] with the current [`DrawStyle`]. Style
//! changes are made through [`Canvas::scoped`], which returns a guard that
//! puts the previous style back when dropped, so no mode (glow, stroke weight,
//! rect anchor) can leak into later drawing.

use std::ops::{Deref, DerefMut};

use super::glow::composite_rounded_rect_glow;
use super::primitives::{
    draw_hline, fill_circle, fill_rounded_rect, fill_vertical_gradient, stroke_circle,
    stroke_rounded_rect,
};
use super::style::{DrawStyle, RectMode};
use super::text::draw_text;
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

/// A framebuffer plus the style every drawing call reads from.
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: Framebuffer,
    style: DrawStyle,
}

impl Canvas {
    /// Create a canvas with a fresh framebuffer and the default style.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_framebuffer(Framebuffer::new(width, height)?))
    }

    /// Wrap an existing framebuffer.
    #[must_use]
    pub fn from_framebuffer(fb: Framebuffer) -> Self {
        Self { fb, style: DrawStyle::default() }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.fb.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.fb.height()
    }

    /// The backing framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }


    /// The style currently in effect.
    #[must_use]
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Apply a style change until the returned guard is dropped.
    ///
    /// ```
    /// use coffee_viz::color::Rgba;
    /// use coffee_viz::render::Canvas;
    ///
    /// let mut canvas = Canvas::new(10, 10).unwrap();
    /// {
    ///     let mut scoped = canvas.scoped(|s| s.fill(Rgba::BLACK).stroke_weight(3.0));
    ///     scoped.rect(0.0, 0.0, 5.0, 5.0, 0.0);
    /// }
    /// assert_eq!(canvas.style().stroke_weight, 1.0);
    /// ```
    pub fn scoped(&mut self, change: impl FnOnce(DrawStyle) -> DrawStyle) -> StyleGuard<'_> {
        let saved = self.style;
        self.style = change(saved);
        StyleGuard { canvas: self, saved }
    }

    /// Replace every pixel with a top-to-bottom gradient.
    pub fn vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        fill_vertical_gradient(&mut self.fb, top, bottom);
    }

    /// Resolve rectangle coordinates according to the current rect mode.
    fn resolve_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        match self.style.rect_mode {
            RectMode::Corner => Rect::new(x, y, w, h),
            RectMode::Center => Rect::from_center(x, y, w, h),
        }
    }

    /// Draw a (rounded) rectangle with the current fill, stroke and glow.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) {
        let rect = self.resolve_rect(x, y, w, h);
        let style = self.style;

        if let Some(fill) = style.fill {
            if let Some(glow) = style.glow {
                composite_rounded_rect_glow(&mut self.fb, &rect, radius, &glow, fill.a);
            }
            fill_rounded_rect(&mut self.fb, &rect, radius, fill);
        }
        if let Some(stroke) = style.stroke {
            stroke_rounded_rect(&mut self.fb, &rect, radius, style.stroke_weight, stroke);
        }
    }

    /// Draw a circle of the given diameter with the current fill and stroke.
    pub fn circle(&mut self, cx: f32, cy: f32, diameter: f32) {
        let center = Point::new(cx, cy);
        let style = self.style;
        if let Some(fill) = style.fill {
            fill_circle(&mut self.fb, center, diameter, fill);
        }
        if let Some(stroke) = style.stroke {
            stroke_circle(&mut self.fb, center, diameter, style.stroke_weight, stroke);
        }
    }

    /// Draw a horizontal line in the current stroke color.
    pub fn hline(&mut self, x0: f32, x1: f32, y: f32) {
        if let Some(stroke) = self.style.stroke {
            draw_hline(&mut self.fb, x0, x1, y, stroke);
        }
    }

    /// Draw text on the baseline at `(x, y)` in the current fill color.
    pub fn text(&mut self, text: &str, x: f32, y: f32) {
        self.text_rotated(text, x, y, 0.0);
    }

    /// Draw text rotated by `angle` radians around its anchor.
    pub fn text_rotated(&mut self, text: &str, x: f32, y: f32, angle: f32) {
        if let Some(fill) = self.style.fill {
            let text_style = self.style.text;
            draw_text(&mut self.fb, text, Point::new(x, y), angle, &text_style, fill);
        }
    }
}

/// Restores the canvas style it was created from when dropped.
///
/// Dereferences to the [`Canvas`], so drawing and nested scoping work through
/// the guard.
#[derive(Debug)]
pub struct StyleGuard<'a> {
    canvas: &'a mut Canvas,
    saved: DrawStyle,
}

impl Deref for StyleGuard<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for StyleGuard<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        self.canvas.style = self.saved;
    }
}
