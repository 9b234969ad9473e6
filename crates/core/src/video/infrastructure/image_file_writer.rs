use std::path::Path;

use crate::shared::color_map_image::ColorMapImage;
use crate::video::domain::image_writer::ImageWriter;

/// Encodes a color map with the `image` crate.
///
/// Channel means are rounded to 8-bit RGB; the container format follows
/// the file extension. PNG keeps every rounded mean intact.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, image: &ColorMapImage) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let width = u32::try_from(image.width())?;
        let height = u32::try_from(image.height())?;
        let img = image::RgbImage::from_raw(width, height, image.to_rgb8())
            .ok_or("Color map size does not match its pixel data")?;

        img.save(path)?;
        Ok(())
    }
}
