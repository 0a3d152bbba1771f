//! Primitive rendering functions.
//!
//! Rasterizes the handful of shapes the chart is built from. All shapes are
//! sampled at pixel centers and alpha-blended into the framebuffer, so
//! translucent fills compose the same way regardless of draw order within a
//! shape.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

// ============================================================================
// Coverage tests
// ============================================================================

/// Clamp a corner radius so it fits inside `rect`.
#[inline]
fn clamp_radius(rect: &Rect, radius: f32) -> f32 {
    radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0)
}

/// Whether `(px, py)` lies inside a rounded rectangle.
#[must_use]
pub fn rounded_rect_contains(rect: &Rect, radius: f32, px: f32, py: f32) -> bool {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return false;
    }
    if !rect.contains(Point::new(px, py)) {
        return false;
    }

    let r = clamp_radius(rect, radius);
    if r <= 0.0 {
        return true;
    }

    // Distance to the nearest point of the inner (radius-shrunk) rectangle
    let cx = px.clamp(rect.x + r, rect.right() - r);
    let cy = py.clamp(rect.y + r, rect.bottom() - r);
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r * r
}

/// Integer pixel bounds `[x0, x1) x [y0, y1)` covering `rect`, clipped to `fb`.
pub(crate) fn pixel_bounds(fb: &Framebuffer, rect: &Rect) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.x.floor().max(0.0);
    let y0 = rect.y.floor().max(0.0);
    let x1 = rect.right().ceil().min(fb.width() as f32);
    let y1 = rect.bottom().ceil().min(fb.height() as f32);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

// ============================================================================
// Lines and gradients
// ============================================================================

/// Draw a 1-pixel horizontal line from `x0` to `x1` on row `y`.
pub fn draw_hline(fb: &mut Framebuffer, x0: f32, x1: f32, y: f32, color: Rgba) {
    let (start, end) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    fb.blend_span(start.round() as i32, end.round() as i32, y.floor() as i32, color);
}

/// Paint the whole framebuffer with a top-to-bottom linear gradient.
///
/// Row `y` receives `top.lerp(bottom, y / height)`.
pub fn fill_vertical_gradient(fb: &mut Framebuffer, top: Rgba, bottom: Rgba) {
    let height = fb.height();
    let width = fb.width();
    for y in 0..height {
        let t = y as f32 / height as f32;
        fb.fill_rect(0, y, width, 1, top.lerp(bottom, t));
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Fill a rounded rectangle.
pub fn fill_rounded_rect(fb: &mut Framebuffer, rect: &Rect, radius: f32, color: Rgba) {
    let Some((x0, y0, x1, y1)) = pixel_bounds(fb, rect) else {
        return;
    };

    for y in y0..y1 {
        let py = y as f32 + 0.5;
        for x in x0..x1 {
            if rounded_rect_contains(rect, radius, x as f32 + 0.5, py) {
                fb.blend_pixel(x, y, color);
            }
        }
    }
}

/// Outline a rounded rectangle with a stroke centered on its edge.
pub fn stroke_rounded_rect(
    fb: &mut Framebuffer,
    rect: &Rect,
    radius: f32,
    weight: f32,
    color: Rgba,
) {
    if weight <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }

    let half = weight / 2.0;
    let outer = rect.inflate(half);
    let inner = rect.inflate(-half);
    let outer_radius = clamp_radius(rect, radius) + half;
    let inner_radius = (clamp_radius(rect, radius) - half).max(0.0);

    let Some((x0, y0, x1, y1)) = pixel_bounds(fb, &outer) else {
        return;
    };

    for y in y0..y1 {
        let py = y as f32 + 0.5;
        for x in x0..x1 {
            let px = x as f32 + 0.5;
            if rounded_rect_contains(&outer, outer_radius, px, py)
                && !rounded_rect_contains(&inner, inner_radius, px, py)
            {
                fb.blend_pixel(x, y, color);
            }
        }
    }
}

// ============================================================================
// Circles
// ============================================================================

/// Fill a circle of the given diameter.
pub fn fill_circle(fb: &mut Framebuffer, center: Point, diameter: f32, color: Rgba) {
    if diameter <= 0.0 {
        return;
    }
    let r = diameter / 2.0;
    let bounds = Rect::new(center.x - r, center.y - r, diameter, diameter);
    let Some((x0, y0, x1, y1)) = pixel_bounds(fb, &bounds) else {
        return;
    };

    for y in y0..y1 {
        let dy = y as f32 + 0.5 - center.y;
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.x;
            if dx * dx + dy * dy <= r * r {
                fb.blend_pixel(x, y, color);
            }
        }
    }
}

/// Outline a circle with a stroke centered on its edge.
pub fn stroke_circle(fb: &mut Framebuffer, center: Point, diameter: f32, weight: f32, color: Rgba) {
    if diameter <= 0.0 || weight <= 0.0 {
        return;
    }
    let r = diameter / 2.0;
    let outer = r + weight / 2.0;
    let inner = (r - weight / 2.0).max(0.0);
    let bounds = Rect::new(center.x - outer, center.y - outer, outer * 2.0, outer * 2.0);
    let Some((x0, y0, x1, y1)) = pixel_bounds(fb, &bounds) else {
        return;
    };

    for y in y0..y1 {
        let dy = y as f32 + 0.5 - center.y;
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - center.x;
            let d2 = dx * dx + dy * dy;
            if d2 <= outer * outer && d2 >= inner * inner {
                fb.blend_pixel(x, y, color);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
