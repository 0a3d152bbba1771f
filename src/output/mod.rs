//! Output encoders (PNG, terminal).

mod png_encoder;
mod terminal;

pub use png_encoder::{frame_file_name, PngEncoder};
pub use terminal::{CellGrid, TerminalEncoder, TerminalMode};
