use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Sequential source of decoded frames.
///
/// Implementations handle codec and container details while the pipeline
/// works with the abstract `Frame` and `VideoMetadata` types. There is no
/// seeking: frames arrive in decode order starting at index 0, and the
/// iterator may end before `total_frames` frames were produced.
pub trait FrameSource: Send {
    /// Opens a video file and returns its metadata, including the declared frame count.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in decode order.
    ///
    /// `None` means end of stream. An `Err` item reports a decode failure.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the source.
    fn close(&mut self);
}
