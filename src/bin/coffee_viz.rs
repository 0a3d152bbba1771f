//! coffee-viz: animated coffee production & consumption chart.
//!
//! Run: `coffee-viz --mode terminal` for the live viewer, or
//! `coffee-viz --frames 120 --out frames/` to export a PNG sequence.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coffee_viz::config::{parse_pointer, Overrides, OutputMode, RunConfig};
use coffee_viz::geometry::Point;
use coffee_viz::host::{export_png_frames, run_interactive, write_text_frames};
use coffee_viz::output::{TerminalEncoder, TerminalMode};
use coffee_viz::sketch::{Sketch, CANVAS_HEIGHT, CANVAS_WIDTH};

/// coffee-viz: animated coffee production & consumption chart
#[derive(Parser, Debug)]
#[command(name = "coffee-viz")]
#[command(version)]
#[command(about = "Animated coffee production & consumption bar chart", long_about = None)]
struct Cli {
    /// Output mode: png, terminal or ascii
    #[arg(short, long)]
    mode: Option<OutputMode>,

    /// Frames to render (0 runs the terminal viewer until quit)
    #[arg(short, long)]
    frames: Option<usize>,

    /// Directory for PNG frames
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Fixed pointer position as X,Y canvas pixels
    #[arg(short, long, value_parser = parse_pointer_arg)]
    pointer: Option<Point>,

    /// Particle seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Terminal columns for text output
    #[arg(long)]
    width_chars: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_pointer_arg(s: &str) -> std::result::Result<Point, String> {
    parse_pointer(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).compact().init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = match &cli.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };
    let config = base
        .with_overrides(Overrides {
            mode: cli.mode,
            frames: cli.frames,
            output_dir: cli.out,
            seed: cli.seed,
            pointer: cli.pointer,
            terminal_width: cli.width_chars,
        })
        .context("invalid configuration")?;
    let frames = config.frame_count();
    info!(mode = %config.mode, frames, seed = ?config.seed, "starting");

    let mut sketch = Sketch::new(CANVAS_WIDTH, CANVAS_HEIGHT, config.seed);
    let pointer = config.pointer_point();

    let summary = match config.mode {
        OutputMode::Png => export_png_frames(&mut sketch, frames, &config.output_dir, pointer)
            .with_context(|| format!("exporting frames to {}", config.output_dir.display()))?,
        OutputMode::Ascii => {
            let encoder =
                TerminalEncoder::new().mode(TerminalMode::Ascii).width(config.terminal_width);
            let mut out = BufWriter::new(io::stdout().lock());
            write_text_frames(&mut sketch, frames, &encoder, pointer, &mut out)
                .context("writing ASCII frames")?
        }
        OutputMode::Terminal => {
            let encoder = TerminalEncoder::new()
                .mode(TerminalMode::UnicodeHalfBlock)
                .width(config.terminal_width);
            run_interactive(&mut sketch, &encoder, frames).context("terminal viewer")?
        }
    };

    info!(frames = summary.frames, hovered = ?summary.last_hovered, "done");
    Ok(())
}
