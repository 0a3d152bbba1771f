//! The shared bar-painting primitive.
//!
//! A bar is painted bottom-up as a stack of 1px rows shaded toward black,
//! with a drop shadow at its foot and a faint halo rect around it. Hovered
//! bars additionally get a highlight outline and a blurred glow in their own
//! color. Every style change is scoped, so nothing leaks into later drawing.

use crate::color::Rgba;
use crate::render::{Canvas, RectMode};

/// Relative amplitude of the breathing animation.
pub const BREATH_AMPLITUDE: f32 = 0.02;
/// Phase offset per pixel of bar x-position.
pub const BREATH_X_FREQUENCY: f32 = 0.01;
/// Blend toward black at the top of the bar.
pub const SHADE_DEPTH: f32 = 0.3;
/// Blur radius of the hover glow.
pub const GLOW_RADIUS: f32 = 20.0;

const SHADOW_COLOR: Rgba = Rgba::new(0, 0, 0, 50);
const SHADOW_OFFSET: f32 = 3.0;
const SHADOW_RADIUS: f32 = 5.0;
const HIGHLIGHT_COLOR: Rgba = Rgba::new(255, 255, 255, 100);
const HIGHLIGHT_WEIGHT: f32 = 2.0;
const HIGHLIGHT_RADIUS: f32 = 5.0;
const HALO_ALPHA: u8 = 30;
const HALO_PADDING: f32 = 10.0;
const HALO_RADIUS: f32 = 8.0;

/// Everything needed to paint one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    /// Horizontal center.
    pub x: f32,
    /// Baseline the bar grows up from.
    pub baseline: f32,
    /// Bar width.
    pub width: f32,
    /// Unanimated height in pixels.
    pub height: f32,
    /// Base color; its alpha is ignored in favor of `alpha`.
    pub color: Rgba,
    /// Opacity of the shaded body.
    pub alpha: u8,
    /// Draw the hover outline and glow.
    pub hovered: bool,
}

/// Height after the breathing modulation for a bar at `x`.
#[must_use]
pub fn animated_height(height: f32, x: f32, phase: f32) -> f32 {
    height * (1.0 + (phase + x * BREATH_X_FREQUENCY).sin() * BREATH_AMPLITUDE)
}

/// Color of shading row `row` in a bar of height `height`.
#[must_use]
pub fn shade_row(color: Rgba, row: u32, height: f32, alpha: u8) -> Rgba {
    let t = if height > 0.0 { row as f32 / height } else { 0.0 };
    color.with_alpha(255).lerp(Rgba::BLACK, t * SHADE_DEPTH).with_alpha(alpha)
}

/// Paint `bar` at animation phase `phase`.
///
/// Output depends only on the canvas contents, `phase` and `bar`; the canvas
/// style is the same on return as on entry.
pub fn paint_bar(canvas: &mut Canvas, phase: f32, bar: &BarSpec) {
    let anim_h = animated_height(bar.height, bar.x, phase).max(0.0);
    let half_w = bar.width / 2.0;
    let top_center = bar.baseline - anim_h / 2.0;

    let mut c = canvas.scoped(|s| s.rect_mode(RectMode::Center).no_stroke());

    {
        let mut shadow = c.scoped(|s| s.fill(SHADOW_COLOR));
        shadow.rect(bar.x + SHADOW_OFFSET, bar.baseline - 2.0, bar.width, 2.0, SHADOW_RADIUS);
    }

    for row in 0..anim_h.ceil() as u32 {
        let color = shade_row(bar.color, row, anim_h, bar.alpha);
        let mut line = c.scoped(|s| s.stroke(color));
        line.hline(bar.x - half_w, bar.x + half_w, bar.baseline - row as f32);
    }

    if bar.hovered {
        let mut outline = c.scoped(|s| {
            s.no_fill().stroke(HIGHLIGHT_COLOR).stroke_weight(HIGHLIGHT_WEIGHT)
        });
        outline.rect(bar.x, top_center, bar.width - 2.0, anim_h - 2.0, HIGHLIGHT_RADIUS);
    }

    let halo = bar.color.with_alpha(HALO_ALPHA);
    let base = bar.color.with_alpha(255);
    let mut glow = c.scoped(|s| {
        let s = s.fill(halo);
        if bar.hovered {
            s.glow(GLOW_RADIUS, base)
        } else {
            s
        }
    });
    glow.rect(bar.x, top_center, bar.width + HALO_PADDING, anim_h + HALO_PADDING, HALO_RADIUS);
}
