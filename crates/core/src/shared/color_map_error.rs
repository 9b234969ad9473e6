use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of [`ColorMapError`], one per remediation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or decoded at all.
    SourceUnavailable,
    /// The input declares zero frames.
    EmptySource,
    /// Size, bar thickness, interval or the derived bar count is unusable.
    InvalidDimensions,
    /// The finished image could not be persisted.
    WriteFailed,
    /// A bar index outside the buffer was written; a caller bug.
    BarOutOfRange,
}

#[derive(Error, Debug)]
pub enum ColorMapError {
    #[error("cannot open video source {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },
    #[error("video source {path} reports zero frames")]
    EmptySource { path: PathBuf },
    #[error(
        "invalid color map dimensions: size {size}, {bar_count} bars of thickness {bar_thickness}"
    )]
    InvalidDimensions {
        size: usize,
        bar_count: usize,
        bar_thickness: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("bar index {index} out of range for {bar_count} bars")]
    BarOutOfRange { index: usize, bar_count: usize },
    #[error("failed to write color map to {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl ColorMapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            Self::EmptySource { .. } => ErrorKind::EmptySource,
            Self::InvalidDimensions { .. } | Self::InvalidConfig(_) => {
                ErrorKind::InvalidDimensions
            }
            Self::BarOutOfRange { .. } => ErrorKind::BarOutOfRange,
            Self::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }

    /// Process exit status for this error.
    ///
    /// Starts at 3: 1 is a generic failure and 2 is clap's usage error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::SourceUnavailable => 3,
            ErrorKind::EmptySource => 4,
            ErrorKind::InvalidDimensions => 5,
            ErrorKind::WriteFailed => 6,
            ErrorKind::BarOutOfRange => 70,
        }
    }
}
