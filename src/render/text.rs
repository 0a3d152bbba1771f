//! Bitmap text rendering.
//!
//! Glyphs come from the `font8x8` legacy table (printable ASCII in an 8x8
//! cell, row 7 reserved for descenders). They are scaled to the requested
//! size and sampled per destination pixel, which makes rotated text fall out
//! of the same code path as upright text.

use font8x8::legacy::BASIC_LEGACY;

use super::style::{TextAlign, TextStyle};
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

/// Glyph cell width in font pixels, spacing included.
pub const GLYPH_WIDTH: usize = 8;
/// Glyph cell height in font pixels, descender row included.
pub const GLYPH_HEIGHT: usize = 8;
/// Rows above the baseline.
const ASCENT: usize = 7;

/// Font pixels per nominal size unit.
const SIZE_TO_SCALE: f32 = 1.0 / 16.0;

/// Look up the bitmap for a character; anything outside ASCII draws as `?`.
///
/// Each row byte holds the leftmost pixel in bit 0.
#[must_use]
pub fn glyph(ch: char) -> &'static [u8; 8] {
    let index = ch as usize;
    if ch.is_ascii() && !ch.is_ascii_control() {
        &BASIC_LEGACY[index]
    } else {
        &BASIC_LEGACY[b'?' as usize]
    }
}

/// Screen pixels per font pixel for a nominal size.
#[must_use]
pub fn font_scale(size: f32) -> f32 {
    (size * SIZE_TO_SCALE).max(1.0)
}

/// Width in pixels of `text` at `size`, excluding the last cell's spacing
/// column.
#[must_use]
pub fn measure(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    (n * GLYPH_WIDTH - 1) as f32 * font_scale(size)
}

/// A run of glyphs laid out in local coordinates.
///
/// The local frame has its origin on the baseline at the aligned start of the
/// text; x grows right and y grows down, so glyphs occupy `y` in
/// `[-ascent, descent)`.
struct Layout<'a> {
    glyphs: Vec<&'a [u8; 8]>,
    scale: f32,
    bold: bool,
    start_x: f32,
}

impl Layout<'_> {
    fn new(text: &str, style: &TextStyle) -> Self {
        let scale = font_scale(style.size);
        let width = measure(text, style.size);
        let start_x = match style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => (-width / 2.0).round(),
            TextAlign::Right => -width,
        };
        Self { glyphs: text.chars().map(glyph).collect(), scale, bold: style.bold, start_x }
    }

    /// Bounds in local coordinates, widened by one pixel for the bold strike.
    fn bounds(&self) -> Rect {
        let width = (self.glyphs.len() * GLYPH_WIDTH) as f32 * self.scale;
        let bold_pad = if self.bold { 1.0 } else { 0.0 };
        let ascent = ASCENT as f32 * self.scale;
        Rect::new(self.start_x, -ascent, width + bold_pad, GLYPH_HEIGHT as f32 * self.scale)
    }

    fn ink_at(&self, lx: f32, ly: f32) -> bool {
        let col = ((lx - self.start_x) / self.scale).floor();
        let row = ((ly + ASCENT as f32 * self.scale) / self.scale).floor();
        if col < 0.0 || row < 0.0 || row >= GLYPH_HEIGHT as f32 {
            return false;
        }
        let col = col as usize;
        let (index, x) = (col / GLYPH_WIDTH, col % GLYPH_WIDTH);
        self.glyphs.get(index).is_some_and(|g| (g[row as usize] >> x) & 1 == 1)
    }

    fn covers(&self, lx: f32, ly: f32) -> bool {
        self.ink_at(lx, ly) || (self.bold && self.ink_at(lx - 1.0, ly))
    }
}

/// Draw `text` anchored at `anchor` (on the baseline), rotated by `angle`
/// radians around the anchor.
pub fn draw_text(
    fb: &mut Framebuffer,
    text: &str,
    anchor: Point,
    angle: f32,
    style: &TextStyle,
    color: Rgba,
) {
    if text.is_empty() || color.a == 0 {
        return;
    }
    let layout = Layout::new(text, style);
    let local = layout.bounds();

    // Screen-space bounding box of the rotated local bounds
    let corners = [
        Point::new(local.x, local.y),
        Point::new(local.right(), local.y),
        Point::new(local.x, local.bottom()),
        Point::new(local.right(), local.bottom()),
    ]
    .map(|p| Point::new(anchor.x + p.x, anchor.y + p.y).rotate_around(anchor, angle));

    let min_x = corners.iter().map(|p| p.x).fold(f32::INFINITY, f32::min).floor().max(0.0);
    let min_y = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor().max(0.0);
    let max_x = corners
        .iter()
        .map(|p| p.x)
        .fold(f32::NEG_INFINITY, f32::max)
        .ceil()
        .min(fb.width() as f32);
    let max_y = corners
        .iter()
        .map(|p| p.y)
        .fold(f32::NEG_INFINITY, f32::max)
        .ceil()
        .min(fb.height() as f32);

    if min_x >= max_x || min_y >= max_y {
        return;
    }

    for y in min_y as u32..max_y as u32 {
        for x in min_x as u32..max_x as u32 {
            let screen = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            let p = screen.rotate_around(anchor, -angle);
            if layout.covers(p.x - anchor.x, p.y - anchor.y) {
                fb.blend_pixel(x, y, color);
            }
        }
    }
}
