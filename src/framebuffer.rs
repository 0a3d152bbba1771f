//! Core framebuffer for pixel rendering.
//!
//! Provides a SIMD-aligned RGBA pixel buffer that stands in for the drawing
//! surface of the chart. Uses trueno for SIMD-accelerated span blending.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::{Backend, Vector};

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned framebuffer for efficient pixel operations.
///
/// Rows are padded to 64 bytes so that wide SIMD loads never straddle rows.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use coffee_viz::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(1000, 700).unwrap();
    /// assert_eq!(fb.width(), 1000);
    /// assert_eq!(fb.height(), 700);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        // Calculate stride with alignment padding
        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);

        let size = stride * (height as usize);

        let mut pixels = Vec::with_capacity(size + SIMD_ALIGNMENT);
        pixels.resize(size, 0);

        Ok(Self { width, height, pixels, stride })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }


    /// Clear the framebuffer to a solid color.
    ///
    /// Copies a 64-byte (16 pixel) pattern per chunk so the compiler can
    /// vectorize the fill.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();

        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for i in 0..16 {
                p[i * 4] = r;
                p[i * 4 + 1] = g;
                p[i * 4 + 2] = b;
                p[i * 4 + 3] = a;
            }
            p
        };

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let row_end = row_start + (self.width as usize) * 4;
            let row = &mut self.pixels[row_start..row_end];

            let mut offset = 0;
            while offset + 64 <= row.len() {
                row[offset..offset + 64].copy_from_slice(&pattern);
                offset += 64;
            }

            for chunk in row[offset..].chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Fill a rectangular region with a solid color, replacing what is there.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height || color.a == 0 {
            return;
        }

        let idx = self.pixel_index(x, y);
        if color.a == 255 {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
            return;
        }

        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round().clamp(0.0, 255.0) as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Blend a horizontal span `[x0, x1)` on row `y`.
    ///
    /// Signed coordinates are accepted and clipped, so callers can pass
    /// geometry that hangs off the canvas. Spans over fully opaque pixels,
    /// which is every span once the background is painted, are blended with
    /// trueno vectors; anything else goes through [`Self::blend_pixel`].
    pub fn blend_span(&mut self, x0: i32, x1: i32, y: i32, color: Rgba) {
        if y < 0 || y >= self.height as i32 || color.a == 0 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width as i32);
        if start >= end {
            return;
        }

        let row_start = (y as usize) * self.stride;
        let range = row_start + (start as usize) * 4..row_start + (end as usize) * 4;
        if color.a == 255 {
            let rgba = color.to_array();
            for chunk in self.pixels[range].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        } else if self.pixels[range.clone()].chunks_exact(4).all(|px| px[3] == 255) {
            blend_opaque_span(&mut self.pixels[range], color);
        } else {
            for x in start..end {
                self.blend_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// PNG expects tightly-packed rows.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// Get the selected SIMD backend.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }
}

/// `out = src * alpha + dst * (1 - alpha)` over a span of opaque pixels.
///
/// The destination alpha stays 255.
fn blend_opaque_span(span: &mut [u8], color: Rgba) {
    let alpha = f32::from(color.a) / 255.0;
    let inv_alpha = 1.0 - alpha;
    let channels = span.len();

    let src: Vec<f32> = [color.r, color.g, color.b, 255]
        .iter()
        .cycle()
        .take(channels)
        .map(|&c| f32::from(c) * alpha)
        .collect();
    let dst = Vector::from_vec(span.iter().map(|&b| f32::from(b)).collect());

    let blended = dst
        .mul(&Vector::from_vec(vec![inv_alpha; channels]))
        .and_then(|scaled| scaled.add(&Vector::from_vec(src.clone())));

    match blended {
        Ok(out) => {
            for (byte, &v) in span.iter_mut().zip(out.as_slice()) {
                *byte = v.round().clamp(0.0, 255.0) as u8;
            }
        }
        Err(_) => {
            for (byte, s) in span.iter_mut().zip(src) {
                *byte = (s + f32::from(*byte) * inv_alpha).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
