//! Rendering backends and rasterization.
//!
//! Provides the drawing surface the chart paints on: a style-scoped
//! [`Canvas`], shape rasterizers, blur-based glow and bitmap text.
//!
//! # Algorithms
//!
//! - **Pixel-center sampling**: rounded rectangles, circles and glyphs are
//!   covered where a pixel's center falls inside the shape
//! - **Cascaded box blur**: three box passes approximate a Gaussian glow

mod canvas;
mod glow;
mod primitives;
mod style;
pub mod text;

pub use canvas::{Canvas, StyleGuard};
pub use glow::{box_radius, composite_rounded_rect_glow};
pub use primitives::{
    draw_hline, fill_circle, fill_rounded_rect, fill_vertical_gradient, rounded_rect_contains,
    stroke_circle, stroke_rounded_rect,
};
pub use style::{DrawStyle, Glow, RectMode, TextAlign, TextStyle};
