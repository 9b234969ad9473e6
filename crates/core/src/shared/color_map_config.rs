use std::path::{Path, PathBuf};

use crate::shared::color_map_error::ColorMapError;
use crate::shared::constants::{DEFAULT_BAR_THICKNESS, DEFAULT_INTERVAL, DEFAULT_SIZE};

/// Parameters of one color map run.
///
/// Built once (usually from CLI flags) and never mutated while the
/// pipeline runs.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMapConfig {
    source: PathBuf,
    size: usize,
    bar_thickness: usize,
    vertical: bool,
    interval: usize,
}

impl ColorMapConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            size: DEFAULT_SIZE,
            bar_thickness: DEFAULT_BAR_THICKNESS,
            vertical: false,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_bar_thickness(mut self, bar_thickness: usize) -> Self {
        self.bar_thickness = bar_thickness;
        self
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Long axis of the color map in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bar_thickness(&self) -> usize {
        self.bar_thickness
    }

    /// Whether the finished map is rotated so bars run horizontally.
    pub fn vertical(&self) -> bool {
        self.vertical
    }

    /// Frames between two samples.
    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Number of bars for a video of `total_frames` frames.
    pub fn bar_count(&self, total_frames: usize) -> usize {
        total_frames.checked_div(self.interval).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ColorMapError> {
        if self.size == 0 {
            return Err(ColorMapError::InvalidConfig(
                "size must be at least 1 pixel".into(),
            ));
        }
        if self.bar_thickness == 0 {
            return Err(ColorMapError::InvalidConfig(
                "bar thickness must be at least 1 pixel".into(),
            ));
        }
        if self.interval == 0 {
            return Err(ColorMapError::InvalidConfig(
                "interval must be at least 1 frame".into(),
            ));
        }
        Ok(())
    }
}
