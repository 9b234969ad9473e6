use ndarray::{Array3, ArrayView3};

use crate::shared::constants::CHANNELS;
use crate::shared::mean_color::MeanColor;

/// A finished color map: `(rows, columns, channel)` of unrounded channel means.
///
/// Produced once by [`ColorMapBuffer::finalize`](crate::color_map::domain::color_map_buffer::ColorMapBuffer::finalize)
/// and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMapImage {
    pixels: Array3<f64>,
}

impl ColorMapImage {
    pub(crate) fn new(pixels: Array3<f64>) -> Self {
        debug_assert_eq!(pixels.shape()[2], CHANNELS);
        Self { pixels }
    }

    pub fn height(&self) -> usize {
        self.pixels.shape()[0]
    }

    pub fn width(&self) -> usize {
        self.pixels.shape()[1]
    }

    /// `(rows, columns, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        let s = self.pixels.shape();
        (s[0], s[1], s[2])
    }

    pub fn pixel(&self, row: usize, col: usize) -> MeanColor {
        MeanColor::new(
            self.pixels[[row, col, 0]],
            self.pixels[[row, col, 1]],
            self.pixels[[row, col, 2]],
        )
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, f64> {
        self.pixels.view()
    }

    /// Packed row-major RGB24, each channel rounded and clamped.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&c| c.round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ColorMapImage {
        let mut pixels = Array3::<f64>::zeros((2, 3, 3));
        pixels[[1, 2, 0]] = 200.4;
        pixels[[1, 2, 1]] = 99.6;
        pixels[[1, 2, 2]] = 300.0;
        ColorMapImage::new(pixels)
    }

    #[test]
    fn test_dimensions() {
        let img = image();
        assert_eq!(img.height(), 2);
        assert_eq!(img.width(), 3);
        assert_eq!(img.shape(), (2, 3, 3));
    }

    #[test]
    fn test_pixel_reads_unrounded_channels() {
        assert_eq!(image().pixel(1, 2), MeanColor::new(200.4, 99.6, 300.0));
        assert_eq!(image().pixel(0, 0), MeanColor::BLACK);
    }

    #[test]
    fn test_to_rgb8_is_row_major_and_clamped() {
        let bytes = image().to_rgb8();
        assert_eq!(bytes.len(), 18);
        // row 1, col 2 is the last pixel
        assert_eq!(&bytes[15..18], &[200, 100, 255]);
        assert!(bytes[..15].iter().all(|&b| b == 0));
    }
}
