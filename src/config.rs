//! Run configuration.
//!
//! Host settings only: where frames go, how many, the particle seed and an
//! optional fixed pointer. Loaded from YAML with precedence
//! CLI > file > defaults. The dataset and chart geometry are not configurable.

use crate::error::{Error, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Frames rendered by the headless modes when no count is given.
pub const DEFAULT_HEADLESS_FRAMES: usize = 60;

/// Where rendered frames are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Numbered PNG files in the output directory.
    #[default]
    Png,
    /// Interactive half-block viewer with mouse hover.
    Terminal,
    /// ASCII frames printed to stdout.
    Ascii,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "terminal" | "term" => Ok(Self::Terminal),
            "ascii" => Ok(Self::Ascii),
            other => Err(Error::Config(format!(
                "unknown mode '{other}' (expected png, terminal or ascii)"
            ))),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Terminal => "terminal",
            Self::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

/// Settings for one run of the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Presentation back-end.
    #[serde(default)]
    pub mode: OutputMode,

    /// Frames to render; see [`RunConfig::frame_count`].
    #[serde(default)]
    pub frames: Option<usize>,

    /// Directory receiving PNG frames.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Particle seed; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Fixed pointer position `[x, y]` in canvas pixels for headless modes.
    #[serde(default)]
    pub pointer: Option<[f32; 2]>,

    /// Terminal columns used by the text back-ends.
    #[serde(default = "default_terminal_width")]
    pub terminal_width: u32,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("frames")
}
fn default_terminal_width() -> u32 {
    100
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            frames: None,
            output_dir: default_output_dir(),
            seed: None,
            pointer: None,
            terminal_width: default_terminal_width(),
        }
    }
}

/// Values given on the command line; `None` leaves the file/default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// `--mode`
    pub mode: Option<OutputMode>,
    /// `--frames`
    pub frames: Option<usize>,
    /// `--out`
    pub output_dir: Option<PathBuf>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--pointer`
    pub pointer: Option<Point>,
    /// `--width-chars`
    pub terminal_width: Option<u32>,
}

impl RunConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with the line number if parsing fails, or if a value
    /// is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::Config(format!("line {line}: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration is invalid.
    pub fn with_overrides(mut self, o: Overrides) -> Result<Self> {
        if let Some(mode) = o.mode {
            self.mode = mode;
        }
        if o.frames.is_some() {
            self.frames = o.frames;
        }
        if let Some(dir) = o.output_dir {
            self.output_dir = dir;
        }
        if o.seed.is_some() {
            self.seed = o.seed;
        }
        if let Some(p) = o.pointer {
            self.pointer = Some([p.x, p.y]);
        }
        if let Some(w) = o.terminal_width {
            self.terminal_width = w;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero terminal width or a non-finite
    /// pointer coordinate.
    pub fn validate(&self) -> Result<()> {
        if self.terminal_width == 0 {
            return Err(Error::Config("terminal_width must be at least 1".into()));
        }
        if let Some([x, y]) = self.pointer {
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::Config(format!("pointer ({x}, {y}) is not finite")));
            }
        }
        Ok(())
    }

    /// Frames to render: the configured count, else 60 for the headless
    /// modes and 0 (run until quit) for the interactive viewer.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.unwrap_or(match self.mode {
            OutputMode::Png | OutputMode::Ascii => DEFAULT_HEADLESS_FRAMES,
            OutputMode::Terminal => 0,
        })
    }

    /// The fixed pointer as a point.
    #[must_use]
    pub fn pointer_point(&self) -> Option<Point> {
        self.pointer.map(|[x, y]| Point::new(x, y))
    }
}

/// Parse a pointer given as `X,Y`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the text is not two comma-separated numbers.
pub fn parse_pointer(s: &str) -> Result<Point> {
    let bad = || Error::Config(format!("pointer '{s}' is not X,Y"));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x: f32 = x.trim().parse().map_err(|_| bad())?;
    let y: f32 = y.trim().parse().map_err(|_| bad())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(bad());
    }
    Ok(Point::new(x, y))
}
