//! Soft glow compositing.
//!
//! A glow is the blurred coverage mask of a shape, tinted and blended beneath
//! it. The Gaussian is approximated with three box-blur passes per axis.
//!
//! # References
//!
//! - Wells, W. M. (1986). "Efficient Synthesis of Gaussian Filters by Cascaded
//!   Uniform Filters." *IEEE PAMI*, 8(2), 234-239.

use super::primitives::{pixel_bounds, rounded_rect_contains};
use super::style::Glow;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;

/// Number of box passes used to approximate a Gaussian.
const BOX_PASSES: usize = 3;

/// Box radius whose triple convolution matches the Gaussian for a blur radius.
///
/// The blur radius is treated like a canvas `shadowBlur`: sigma is half of it.
#[must_use]
pub fn box_radius(blur_radius: f32) -> usize {
    let sigma = blur_radius / 2.0;
    if sigma <= 0.0 {
        return 0;
    }
    let ideal_width = (12.0 * sigma * sigma / BOX_PASSES as f32 + 1.0).sqrt();
    (ideal_width / 2.0).floor() as usize
}

/// One horizontal box-blur pass over a `w x h` mask. Samples outside are zero.
fn blur_rows(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f32;
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let out = &mut dst[y * w..(y + 1) * w];
        let mut acc: f32 = row.iter().take(r + 1).sum();
        for x in 0..w {
            out[x] = acc * norm;
            if x + r + 1 < w {
                acc += row[x + r + 1];
            }
            if x >= r {
                acc -= row[x - r];
            }
        }
    }
}

/// One vertical box-blur pass over a `w x h` mask. Samples outside are zero.
fn blur_cols(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize) {
    let norm = 1.0 / (2 * r + 1) as f32;
    for x in 0..w {
        let mut acc: f32 = (0..=r.min(h - 1)).map(|y| src[y * w + x]).sum();
        for y in 0..h {
            dst[y * w + x] = acc * norm;
            if y + r + 1 < h {
                acc += src[(y + r + 1) * w + x];
            }
            if y >= r {
                acc -= src[(y - r) * w + x];
            }
        }
    }
}

/// Blur a coverage mask in place.
pub(crate) fn blur_mask(mask: &mut [f32], w: usize, h: usize, radius: usize) {
    if radius == 0 || w == 0 || h == 0 {
        return;
    }
    let mut scratch = vec![0.0; mask.len()];
    for _ in 0..BOX_PASSES {
        blur_rows(mask, &mut scratch, w, h, radius);
        blur_cols(&scratch, mask, w, h, radius);
    }
}

/// Composite the glow of a rounded rectangle filled with alpha `fill_alpha`.
///
/// Only the glow is drawn; the caller paints the shape itself afterwards.
pub fn composite_rounded_rect_glow(
    fb: &mut Framebuffer,
    rect: &Rect,
    corner_radius: f32,
    glow: &Glow,
    fill_alpha: u8,
) {
    let r = box_radius(glow.radius);
    let reach = (r * BOX_PASSES) as f32;
    let Some((x0, y0, x1, y1)) = pixel_bounds(fb, &rect.inflate(reach)) else {
        return;
    };

    let w = (x1 - x0) as usize;
    let h = (y1 - y0) as usize;
    let mut mask = vec![0.0f32; w * h];
    for (j, y) in (y0..y1).enumerate() {
        let py = y as f32 + 0.5;
        for (i, x) in (x0..x1).enumerate() {
            if rounded_rect_contains(rect, corner_radius, x as f32 + 0.5, py) {
                mask[j * w + i] = 1.0;
            }
        }
    }

    blur_mask(&mut mask, w, h, r);

    let strength = f32::from(glow.color.a) / 255.0 * f32::from(fill_alpha) / 255.0;
    for (j, y) in (y0..y1).enumerate() {
        for (i, x) in (x0..x1).enumerate() {
            let alpha = (mask[j * w + i] * strength * 255.0).round();
            if alpha >= 1.0 {
                fb.blend_pixel(x, y, glow.color.with_alpha(alpha.min(255.0) as u8));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_box_radius() {
        assert_eq!(box_radius(0.0), 0);
        // shadowBlur 20 -> sigma 10 -> width ~20 -> radius 10
        assert_eq!(box_radius(20.0), 10);
        assert!(box_radius(4.0) >= 1);
    }

    #[test]
    fn test_blur_preserves_mass_away_from_edges() {
        let (w, h) = (41, 41);
        let mut mask = vec![0.0; w * h];
        mask[20 * w + 20] = 1.0;
        blur_mask(&mut mask, w, h, 2);

        let total: f32 = mask.iter().sum();
        assert!((total - 1.0).abs() < 1e-3);
        // Peak stays at the center and spreads outward
        assert!(mask[20 * w + 20] > mask[20 * w + 23]);
        assert!(mask[20 * w + 23] > 0.0);
    }

    #[test]
    fn test_blur_zero_radius_is_identity() {
        let mut mask = vec![0.0, 1.0, 0.0, 0.5];
        let before = mask.clone();
        blur_mask(&mut mask, 2, 2, 0);
        assert_eq!(mask, before);
    }

    #[test]
    fn test_glow_spills_outside_shape() {
        let mut fb = Framebuffer::new(120, 120).unwrap();
        fb.clear(Rgba::BLACK);
        let rect = Rect::new(50.0, 50.0, 20.0, 20.0);
        let glow = Glow::new(20.0, Rgba::rgb(255, 200, 0));

        composite_rounded_rect_glow(&mut fb, &rect, 4.0, &glow, 255);

        // Just outside the shape picks up some tint
        let near = fb.get_pixel(45, 60).unwrap();
        assert!(near.r > 0);
        // Far corner untouched
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_glow_scaled_by_fill_alpha() {
        let rect = Rect::new(40.0, 40.0, 20.0, 20.0);
        let glow = Glow::new(20.0, Rgba::WHITE);

        let mut strong = Framebuffer::new(100, 100).unwrap();
        strong.clear(Rgba::BLACK);
        composite_rounded_rect_glow(&mut strong, &rect, 0.0, &glow, 255);

        let mut faint = Framebuffer::new(100, 100).unwrap();
        faint.clear(Rgba::BLACK);
        composite_rounded_rect_glow(&mut faint, &rect, 0.0, &glow, 30);

        let s = strong.get_pixel(50, 50).unwrap().r;
        let f = faint.get_pixel(50, 50).unwrap().r;
        assert!(s > f);
    }
}
