//! Interactive terminal viewer.
//!
//! Shows the animation as half-block art in the alternate screen and feeds
//! mouse movement back into the chart as the pointer, so hovering a bar in
//! the terminal raises its tooltip. `q`, `Esc` or `Ctrl-C` quits.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::{debug, info, warn};

use super::clock::{FrameClock, TARGET_FPS};
use super::export::ExportSummary;
use crate::error::Result;
use crate::geometry::Point;
use crate::output::{CellGrid, TerminalEncoder};
use crate::sketch::Sketch;

/// What the driver should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// The terminal was resized; clear before the next frame.
    Redraw,
    /// Leave the viewer.
    Quit,
}

/// Apply one terminal event to the pointer state.
///
/// Mouse movement inside the grid moves the pointer to the canvas point under
/// the cell; movement outside it clears the pointer.
pub fn handle_event(event: &Event, grid: &CellGrid, pointer: &mut Option<Point>) -> Control {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            _ => Control::Continue,
        },
        Event::Mouse(mouse) => {
            if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                *pointer = grid.cell_to_canvas(mouse.column, mouse.row);
            }
            Control::Continue
        }
        Event::FocusLost => {
            *pointer = None;
            Control::Continue
        }
        Event::Resize(..) => Control::Redraw,
        _ => Control::Continue,
    }
}

/// Switch to the alternate screen with mouse and focus reporting on.
fn write_setup<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        Hide,
        Clear(ClearType::All)
    )
}

/// Undo [`write_setup`].
fn write_teardown<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen)
}

/// Raw mode plus alternate screen, restored on drop.
struct TerminalSession<W: Write> {
    out: W,
}

impl<W: Write> TerminalSession<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        let mut session = Self { out };
        write_setup(&mut session.out)?;
        Ok(session)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = write_teardown(&mut self.out) {
            warn!(error = %e, "failed to restore terminal screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to leave raw mode");
        }
    }
}

/// Run the viewer on stdout until the user quits, or for `max_frames`
/// frames when it is non-zero.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured or written.
pub fn run_interactive(
    sketch: &mut Sketch,
    encoder: &TerminalEncoder,
    max_frames: usize,
) -> Result<ExportSummary> {
    let mut canvas = sketch.new_canvas()?;
    let grid = encoder.grid(canvas.width(), canvas.height());
    info!(columns = grid.columns, rows = grid.rows, "starting interactive viewer");

    let mut session = TerminalSession::enter(io::stdout())?;
    let mut clock = FrameClock::new(TARGET_FPS, Instant::now());
    let mut pointer = None;
    let mut summary = ExportSummary::default();

    'frames: while max_frames == 0 || summary.frames < max_frames {
        let hovered = sketch.render_frame(&mut canvas, pointer);
        if hovered != summary.last_hovered {
            debug!(?hovered, ?pointer, "hover changed");
        }
        summary.last_hovered = hovered;
        summary.frames += 1;

        for (row, line) in encoder.render_lines(canvas.framebuffer()).iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(session.out, MoveTo(0, row), Print(line))?;
        }
        session.out.flush()?;
        clock.tick(Instant::now());

        while event::poll(clock.remaining(Instant::now()))? {
            match handle_event(&event::read()?, &grid, &mut pointer) {
                Control::Continue => {}
                Control::Redraw => queue!(session.out, Clear(ClearType::All))?,
                Control::Quit => break 'frames,
            }
        }
    }

    drop(session);
    info!(frames = summary.frames, overruns = clock.overruns(), "viewer closed");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn grid() -> CellGrid {
        TerminalEncoder::new().width(100).grid(1000, 700)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn test_quit_keys() {
        let mut pointer = None;
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(handle_event(&Event::Key(key), &grid(), &mut pointer), Control::Quit);
        }
        let plain_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(handle_event(&plain_c, &grid(), &mut pointer), Control::Continue);
    }

    #[test]
    fn test_mouse_move_sets_pointer() {
        let mut pointer = None;
        // Column 52 row 20 -> canvas (525, 410), inside Ethiopia's slot
        let control = handle_event(&mouse(MouseEventKind::Moved, 52, 20), &grid(), &mut pointer);
        assert_eq!(control, Control::Continue);
        assert_eq!(pointer, Some(Point::new(525.0, 410.0)));

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 8, 20);
        handle_event(&drag, &grid(), &mut pointer);
        assert_eq!(pointer, Some(Point::new(85.0, 410.0)));
    }

    #[test]
    fn test_mouse_outside_grid_clears_pointer() {
        let mut pointer = Some(Point::new(1.0, 1.0));
        handle_event(&mouse(MouseEventKind::Moved, 150, 2), &grid(), &mut pointer);
        assert_eq!(pointer, None);
    }

    #[test]
    fn test_clicks_do_not_move_pointer() {
        let mut pointer = Some(Point::new(1.0, 1.0));
        handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 5), &grid(), &mut pointer);
        assert_eq!(pointer, Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_focus_lost_and_resize() {
        let mut pointer = Some(Point::new(1.0, 1.0));
        assert_eq!(handle_event(&Event::FocusLost, &grid(), &mut pointer), Control::Continue);
        assert_eq!(pointer, None);
        assert_eq!(handle_event(&Event::Resize(80, 24), &grid(), &mut pointer), Control::Redraw);
    }

    #[test]
    fn test_session_reports_focus_changes() {
        let mut setup = Vec::new();
        write_setup(&mut setup).unwrap();
        let setup = String::from_utf8_lossy(&setup);
        assert!(setup.contains("\x1b[?1004h"), "{setup:?}");
        assert!(setup.contains("\x1b[?1049h"), "{setup:?}");

        let mut teardown = Vec::new();
        write_teardown(&mut teardown).unwrap();
        let teardown = String::from_utf8_lossy(&teardown);
        assert!(teardown.contains("\x1b[?1004l"), "{teardown:?}");
        assert!(teardown.contains("\x1b[?1049l"), "{teardown:?}");
    }
}
