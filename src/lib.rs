//! # coffee-viz
//!
//! Animated, interactive bar chart of coffee production and consumption for
//! eight producing countries, rendered on a software framebuffer.
//!
//! Every frame is redrawn from scratch: a gradient background, drifting
//! particles, a glowing title, paired "breathing" bars with rotated labels,
//! a hover tooltip, and a legend. Frames can be exported as PNG, printed as
//! terminal art, or viewed live in a terminal with mouse hover.
//!
//! ## Quick Start
//!
//! ```rust
//! use coffee_viz::prelude::*;
//!
//! let mut sketch = Sketch::new(CANVAS_WIDTH, CANVAS_HEIGHT, Some(7));
//! let mut canvas = sketch.new_canvas()?;
//!
//! // Pointer inside Ethiopia's slot
//! let hovered = sketch.render_frame(&mut canvas, Some(Point::new(520.0, 400.0)));
//! assert_eq!(hovered, Some(4));
//!
//! let png = PngEncoder::to_bytes(canvas.framebuffer())?;
//! assert!(!png.is_empty());
//! # Ok::<(), coffee_viz::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA colors.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Chart Modules
// ============================================================================

pub mod dataset;

pub mod particles;

pub mod chart;

pub mod sketch;

// ============================================================================
// Host Modules
// ============================================================================

pub mod config;

pub mod host;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for coffee-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use coffee_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{ChartLayout, CONSUMPTION_COLOR};
    pub use crate::color::Rgba;
    pub use crate::config::{OutputMode, RunConfig};
    pub use crate::dataset::{coffee_data, CountryRecord, COFFEE_DATA};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{Canvas, DrawStyle, RectMode, TextAlign};
    pub use crate::sketch::{Sketch, ViewState, CANVAS_HEIGHT, CANVAS_WIDTH};
}
