/// Length of the long axis of the color map in pixels (height when horizontal).
pub const DEFAULT_SIZE: usize = 3000;

pub const DEFAULT_BAR_THICKNESS: usize = 1;

/// Frames between two samples; one bar per second of 24 fps footage.
pub const DEFAULT_INTERVAL: usize = 24;

/// Frames between two progress lines of [`StdoutPipelineLogger`](crate::pipeline::pipeline_logger::StdoutPipelineLogger).
pub const DEFAULT_PROGRESS_EVERY: usize = 1000;

pub const DEFAULT_OUTPUT: &str = "results/result.png";

/// Color channels per pixel (RGB).
pub const CHANNELS: usize = 3;
