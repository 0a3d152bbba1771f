//! Drivers that schedule frames and present them.
//!
//! - [`export_png_frames`]: headless numbered PNG sequence
//! - [`write_text_frames`]: headless ASCII or half-block frames to a writer
//! - [`run_interactive`]: live terminal viewer with mouse hover

mod clock;
mod export;
mod interactive;

pub use clock::{FrameClock, TARGET_FPS};
pub use export::{export_png_frames, write_text_frames, ExportSummary};
pub use interactive::{handle_event, run_interactive, Control};
