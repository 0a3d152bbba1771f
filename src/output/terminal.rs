//! Terminal output encoder (ASCII / Unicode half-block).
//!
//! Downsamples a framebuffer onto a grid of character cells:
//! - ASCII: one luminance character per cell from a ` .:-=+*#%@` ramp
//! - Unicode: `▀` per cell with 24-bit foreground (top) and background
//!   (bottom) colors, giving two canvas rows per text row
//!
//! Each cell (or half cell) shows the average of the canvas block it covers,
//! so thin strokes fade instead of vanishing. [`CellGrid`] also maps cells
//! back to canvas coordinates for pointer input.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters with 24-bit color (2x vertical resolution)
    #[default]
    UnicodeHalfBlock,
}

impl TerminalMode {
    /// Canvas samples stacked in one text row.
    #[must_use]
    pub const fn samples_per_row(self) -> u32 {
        match self {
            Self::Ascii => 1,
            Self::UnicodeHalfBlock => 2,
        }
    }
}

/// Mapping between a canvas and the character cells showing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    /// Text columns.
    pub columns: u32,
    /// Text rows.
    pub rows: u32,
    /// Canvas pixels per column.
    pub cell_width: f32,
    /// Canvas pixels per text row.
    pub cell_height: f32,
}

impl CellGrid {
    /// Canvas point at the center of cell `(column, row)`, or `None` if the
    /// cell lies outside the grid.
    #[must_use]
    pub fn cell_to_canvas(&self, column: u16, row: u16) -> Option<Point> {
        let (column, row) = (u32::from(column), u32::from(row));
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(Point::new(
            (column as f32 + 0.5) * self.cell_width,
            (row as f32 + 0.5) * self.cell_height,
        ))
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    height: Option<u32>,
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Approximate height/width ratio of a terminal character cell.
    const CHAR_ASPECT: f32 = 2.0;

    /// Default column count when no width is set.
    const DEFAULT_COLUMNS: u32 = 100;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Set the target height in text rows.
    /// If not set, calculated from the width to preserve aspect ratio.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height.max(1));
        self
    }

    /// The configured mode.
    #[must_use]
    pub fn terminal_mode(&self) -> TerminalMode {
        self.mode
    }

    /// Cell layout used for a canvas of `width` x `height` pixels.
    #[must_use]
    pub fn grid(&self, width: u32, height: u32) -> CellGrid {
        let (width, height) = (width.max(1), height.max(1));
        let columns = self.width.unwrap_or_else(|| Self::DEFAULT_COLUMNS.min(width));
        let rows = self.height.unwrap_or_else(|| {
            let rows = (u64::from(height) * u64::from(columns)) as f32
                / (width as f32 * Self::CHAR_ASPECT);
            (rows.round() as u32).max(1)
        });
        CellGrid {
            columns,
            rows,
            cell_width: width as f32 / columns as f32,
            cell_height: height as f32 / rows as f32,
        }
    }

    /// Render a framebuffer to one string per text row, without newlines.
    #[must_use]
    pub fn render_lines(&self, fb: &Framebuffer) -> Vec<String> {
        let grid = self.grid(fb.width(), fb.height());
        let sub_rows = self.mode.samples_per_row();
        let sample_h = grid.cell_height / sub_rows as f32;

        (0..grid.rows)
            .map(|row| {
                let mut line = String::with_capacity(grid.columns as usize * 4);
                for col in 0..grid.columns {
                    let x0 = col as f32 * grid.cell_width;
                    let y0 = row as f32 * grid.cell_height;
                    match self.mode {
                        TerminalMode::Ascii => {
                            let c = average(fb, x0, y0, grid.cell_width, sample_h);
                            line.push(Self::ASCII_RAMP[luma_to_index(luminance(c))]);
                        }
                        TerminalMode::UnicodeHalfBlock => {
                            let top = average(fb, x0, y0, grid.cell_width, sample_h);
                            let bottom = average(fb, x0, y0 + sample_h, grid.cell_width, sample_h);
                            // ▀ U+2580 = upper half block
                            let _ = write!(
                                line,
                                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                                top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                            );
                        }
                    }
                }
                if self.mode == TerminalMode::UnicodeHalfBlock {
                    line.push_str("\x1b[0m");
                }
                line
            })
            .collect()
    }

    /// Render a framebuffer to a newline-terminated string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let mut output = String::new();
        for line in self.render_lines(fb) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

/// Mean color of the canvas block `[x0, x0 + w) x [y0, y0 + h)`.
fn average(fb: &Framebuffer, x0: f32, y0: f32, w: f32, h: f32) -> Rgba {
    let (xa, ya) = (x0.floor() as u32, y0.floor() as u32);
    let xs = xa..((x0 + w).ceil() as u32).min(fb.width()).max(xa + 1);
    let ys = ya..((y0 + h).ceil() as u32).min(fb.height()).max(ya + 1);

    let (mut sum, mut n) = ([0u32; 3], 0u32);
    for y in ys {
        for x in xs.clone() {
            if let Some(p) = fb.get_pixel(x, y) {
                sum[0] += u32::from(p.r);
                sum[1] += u32::from(p.g);
                sum[2] += u32::from(p.b);
                n += 1;
            }
        }
    }
    if n == 0 {
        return Rgba::BLACK;
    }
    Rgba::rgb((sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8)
}

/// Rec. 709 luminance in `[0, 1]`.
fn luminance(c: Rgba) -> f32 {
    0.2126 * (f32::from(c.r) / 255.0)
        + 0.7152 * (f32::from(c.g) / 255.0)
        + 0.0722 * (f32::from(c.b) / 255.0)
}

/// Convert luminance (0.0-1.0) to ASCII ramp index.
fn luma_to_index(luma: f32) -> usize {
    let last = TerminalEncoder::ASCII_RAMP.len() - 1;
    ((luma * last as f32).round() as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_render_white() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&fb);

        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_ascii_render_black() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&fb);

        assert!(output.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_half_block_contains_ansi() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::rgb(100, 150, 255));

        let output = TerminalEncoder::new().width(5).render(&fb);

        assert!(output.contains("\x1b[38;2;100;150;255m"));
        assert!(output.contains("\x1b[48;2;100;150;255m"));
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_half_block_splits_top_and_bottom() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::BLACK);
        fb.fill_rect(0, 0, 4, 2, Rgba::WHITE);

        let lines = TerminalEncoder::new().width(1).height(1).render_lines(&fb);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m"));
    }

    #[test]
    fn test_block_average_keeps_thin_lines() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::BLACK);
        fb.fill_rect(0, 5, 20, 1, Rgba::WHITE);

        let lines =
            TerminalEncoder::new().mode(TerminalMode::Ascii).width(2).height(2).render_lines(&fb);

        // One white row out of ten averages to a dim but visible cell
        assert_ne!(lines[0], "  ");
        assert_eq!(lines[1], "  ");
    }

    #[test]
    fn test_grid_aspect_ratio() {
        let grid = TerminalEncoder::new().width(100).grid(1000, 700);
        assert_eq!(grid.columns, 100);
        assert_eq!(grid.rows, 35);
        assert!((grid.cell_width - 10.0).abs() < f32::EPSILON);
        assert!((grid.cell_height - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_custom_dimensions() {
        let fb = Framebuffer::new(100, 100).unwrap();

        let output =
            TerminalEncoder::new().mode(TerminalMode::Ascii).width(20).height(10).render(&fb);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].len(), 20);
    }

    #[test]
    fn test_default_width_capped_at_canvas() {
        let grid = TerminalEncoder::new().grid(40, 40);
        assert_eq!(grid.columns, 40);
        let grid = TerminalEncoder::new().grid(1000, 700);
        assert_eq!(grid.columns, 100);
    }

    #[test]
    fn test_cell_to_canvas() {
        let grid = TerminalEncoder::new().width(100).grid(1000, 700);
        assert_eq!(grid.cell_to_canvas(0, 0), Some(Point::new(5.0, 10.0)));
        assert_eq!(grid.cell_to_canvas(52, 20), Some(Point::new(525.0, 410.0)));
        assert_eq!(grid.cell_to_canvas(100, 0), None);
        assert_eq!(grid.cell_to_canvas(0, 35), None);
    }
}
