//! Headless drivers: render a fixed number of frames to PNG files or text.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::output::{PngEncoder, TerminalEncoder};
use crate::sketch::Sketch;

/// What a headless run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSummary {
    /// Frames rendered.
    pub frames: usize,
    /// Files written, in frame order (empty for text output).
    pub paths: Vec<PathBuf>,
    /// Slot hovered in the last frame.
    pub last_hovered: Option<usize>,
}

/// Render `frames` frames with a fixed `pointer`, writing each as
/// `frame_NNNNN.png` into `dir` (created if missing).
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a frame cannot be
/// encoded or written.
pub fn export_png_frames(
    sketch: &mut Sketch,
    frames: usize,
    dir: &Path,
    pointer: Option<Point>,
) -> Result<ExportSummary> {
    std::fs::create_dir_all(dir)?;
    info!(frames, dir = %dir.display(), backend = ?Framebuffer::backend(), "exporting PNG frames");

    let started = Instant::now();
    let mut canvas = sketch.new_canvas()?;
    let mut summary = ExportSummary::default();

    for index in 0..frames {
        summary.last_hovered = sketch.render_frame(&mut canvas, pointer);
        let path = PngEncoder::write_frame(canvas.framebuffer(), dir, index)?;
        debug!(index, path = %path.display(), hovered = ?summary.last_hovered, "frame written");
        summary.paths.push(path);
        summary.frames += 1;
    }

    info!(frames = summary.frames, elapsed_ms = started.elapsed().as_millis(), "export finished");
    Ok(summary)
}

/// Render `frames` frames with a fixed `pointer` as text, each followed by a
/// blank line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_text_frames<W: Write>(
    sketch: &mut Sketch,
    frames: usize,
    encoder: &TerminalEncoder,
    pointer: Option<Point>,
    out: &mut W,
) -> Result<ExportSummary> {
    info!(frames, mode = ?encoder.terminal_mode(), "writing text frames");

    let mut canvas = sketch.new_canvas()?;
    let mut summary = ExportSummary::default();

    for index in 0..frames {
        summary.last_hovered = sketch.render_frame(&mut canvas, pointer);
        out.write_all(encoder.render(canvas.framebuffer()).as_bytes())?;
        writeln!(out)?;
        debug!(index, "text frame written");
        summary.frames += 1;
    }
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TerminalMode;
    use crate::sketch::{CANVAS_HEIGHT, CANVAS_WIDTH};

    #[test]
    fn test_text_frames_ascii() {
        let mut sketch = Sketch::new(CANVAS_WIDTH, CANVAS_HEIGHT, Some(5));
        let encoder = TerminalEncoder::new().mode(TerminalMode::Ascii).width(50);
        let mut out = Vec::new();

        let summary =
            write_text_frames(&mut sketch, 2, &encoder, Some(Point::new(80.0, 500.0)), &mut out)
                .unwrap();

        assert_eq!(summary.frames, 2);
        assert_eq!(summary.last_hovered, Some(0));
        let text = String::from_utf8(out).unwrap();
        // 50 columns, 1000:700 canvas, 2:1 cells -> 18 rows, plus a blank separator
        assert_eq!(text.lines().count(), 2 * (18 + 1));
        assert_eq!(text.lines().next().unwrap().chars().count(), 50);
    }

    #[test]
    fn test_zero_frames_writes_nothing() {
        let mut sketch = Sketch::new(CANVAS_WIDTH, CANVAS_HEIGHT, Some(5));
        let mut out = Vec::new();
        let summary =
            write_text_frames(&mut sketch, 0, &TerminalEncoder::new(), None, &mut out).unwrap();
        assert_eq!(summary, ExportSummary::default());
        assert!(out.is_empty());
    }
}
