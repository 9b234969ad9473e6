use std::path::Path;
use std::time::Instant;

use crate::color_map::domain::color_map_buffer::ColorMapBuffer;
use crate::color_map::domain::frame_reducer::FrameReducer;
use crate::shared::color_map_config::ColorMapConfig;
use crate::shared::color_map_error::ColorMapError;
use crate::shared::color_map_image::ColorMapImage;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::frame_source::FrameSource;
use crate::video::domain::image_writer::ImageWriter;

use super::pipeline_logger::PipelineLogger;
use super::pipeline_state::PipelineState;

/// What the sampling loop saw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SamplingStats {
    pub frames_read: usize,
    pub bars_written: usize,
    /// Decoding stopped before the declared frame count.
    pub ended_early: bool,
}

/// Builds a color map: open → size → sample → finalize, then save.
///
/// [`compute`](Self::compute) and [`save`](Self::save) are separate so a
/// failed save can be retried without decoding the video again.
pub struct CreateColorMapUseCase {
    source: Box<dyn FrameSource>,
    reducer: Box<dyn FrameReducer>,
    writer: Box<dyn ImageWriter>,
    logger: Box<dyn PipelineLogger>,
    config: ColorMapConfig,
    state: PipelineState,
}

impl CreateColorMapUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        reducer: Box<dyn FrameReducer>,
        writer: Box<dyn ImageWriter>,
        logger: Box<dyn PipelineLogger>,
        config: ColorMapConfig,
    ) -> Self {
        Self {
            source,
            reducer,
            writer,
            logger,
            config,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn config(&self) -> &ColorMapConfig {
        &self.config
    }

    /// Scans the whole video and returns the finished color map.
    ///
    /// A stream that ends before its declared frame count is not an error:
    /// the bars that were never reached stay black.
    pub fn compute(&mut self) -> Result<ColorMapImage, ColorMapError> {
        let result = self.run();
        match &result {
            Ok(_) => self.state = PipelineState::Done,
            Err(e) => {
                self.source.close();
                self.state = PipelineState::Failed(e.kind());
            }
        }
        result
    }

    /// Writes `image` to `output_path`. Safe to call again after a failure.
    pub fn save(
        &mut self,
        image: &ColorMapImage,
        output_path: &Path,
    ) -> Result<(), ColorMapError> {
        let started = Instant::now();
        self.writer
            .write(output_path, image)
            .map_err(|e| ColorMapError::WriteFailed {
                path: output_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.logger.timing("write", elapsed_ms(started));
        Ok(())
    }

    /// Forwards to the logger's end-of-run summary.
    pub fn summary(&self) {
        self.logger.summary();
    }

    fn run(&mut self) -> Result<ColorMapImage, ColorMapError> {
        self.state = PipelineState::Idle;
        self.config.validate()?;

        let path = self.config.source().to_path_buf();
        let metadata =
            self.source
                .open(&path)
                .map_err(|e| ColorMapError::SourceUnavailable {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

        self.state = PipelineState::Sizing;
        let total_frames = metadata.total_frames;
        self.logger.info(&describe_source(&path, &metadata));
        if total_frames == 0 {
            return Err(ColorMapError::EmptySource { path });
        }

        let bar_count = self.config.bar_count(total_frames);
        let mut buffer =
            ColorMapBuffer::create(self.config.size(), bar_count, self.config.bar_thickness())?;

        self.state = PipelineState::Sampling;
        let stats = sample_frames(
            self.source.frames(),
            self.reducer.as_ref(),
            self.logger.as_mut(),
            &mut buffer,
            total_frames,
            self.config.interval(),
        )?;
        self.source.close();

        self.logger.metric("frames_read", stats.frames_read as f64);
        self.logger.metric("bars_written", stats.bars_written as f64);
        if stats.ended_early {
            self.logger.info(&format!(
                "Decoding stopped after {} of {} frames; {} of {} bars left black",
                stats.frames_read,
                total_frames,
                bar_count - stats.bars_written,
                bar_count
            ));
        }

        self.state = PipelineState::Finalizing;
        let image = buffer.finalize(self.config.vertical());
        self.logger.info(&format!(
            "Color map is {}x{} pixels ({} bars)",
            image.width(),
            image.height(),
            bar_count
        ));
        Ok(image)
    }
}

/// Pulls frames in order and writes a bar for every `interval`-th one.
///
/// Stops after `total_frames` frames or at the first end-of-stream or
/// decode error, whichever comes first.
fn sample_frames<'a>(
    mut frames: Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + 'a>,
    reducer: &dyn FrameReducer,
    logger: &mut dyn PipelineLogger,
    buffer: &mut ColorMapBuffer,
    total_frames: usize,
    interval: usize,
) -> Result<SamplingStats, ColorMapError> {
    let mut stats = SamplingStats::default();

    for frame_index in 0..total_frames {
        let started = Instant::now();
        let frame = match frames.next() {
            Some(Ok(frame)) => frame,
            Some(Err(e)) => {
                log::warn!("Decode error at frame {frame_index}, ending stream early: {e}");
                stats.ended_early = true;
                break;
            }
            None => {
                log::warn!("Stream ended at frame {frame_index} of {total_frames}");
                stats.ended_early = true;
                break;
            }
        };
        logger.timing("decode", elapsed_ms(started));
        stats.frames_read += 1;

        let bar = frame_index / interval;
        if frame_index % interval == 0 && bar < buffer.bar_count() {
            let started = Instant::now();
            let color = reducer.reduce(&frame);
            buffer.write_bar(bar, color)?;
            logger.timing("reduce", elapsed_ms(started));
            log::debug!(
                "Bar {bar} from frame {frame_index}: ({:.1}, {:.1}, {:.1})",
                color.r,
                color.g,
                color.b
            );
            stats.bars_written += 1;
        }

        logger.progress(frame_index + 1, total_frames);
    }

    Ok(stats)
}

/// One-line description of an opened source for the progress log.
fn describe_source(path: &Path, metadata: &VideoMetadata) -> String {
    let duration = match metadata.duration_secs() {
        Some(secs) => format!("{secs:.1}s"),
        None => "unknown duration".to_string(),
    };
    format!(
        "Opened {}: {}x{}, {:.3} fps, {} frames, {} ({})",
        path.display(),
        metadata.width,
        metadata.height,
        metadata.fps,
        metadata.total_frames,
        duration,
        metadata.codec
    )
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
