use std::fmt;
use std::io;
use std::path::PathBuf;

use life_core::GridError;

/// Errors that can occur while turning input into a starting board.
#[derive(Debug)]
pub enum LoadError {
    /// The pattern file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// No rows were left after skipping blank lines and trimming borders.
    Empty,
    /// No built-in pattern has this name.
    UnknownPreset(String),
    /// The parsed matrix was rejected by [`life_core::Grid`].
    Grid(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "load: cannot read {}: {source}", path.display())
            }
            Self::Empty => f.write_str("load: pattern has no rows"),
            Self::UnknownPreset(name) => write!(f, "load: unknown preset \u{201c}{name}\u{201d}"),
            Self::Grid(e) => write!(f, "load: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Empty | Self::UnknownPreset(_) => None,
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
