use std::path::Path;

use crate::shared::color_map_image::ColorMapImage;

/// Persists a finished color map.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, image: &ColorMapImage) -> Result<(), Box<dyn std::error::Error>>;
}
