use ndarray::{s, Array3};

use crate::shared::color_map_error::ColorMapError;
use crate::shared::color_map_image::ColorMapImage;
use crate::shared::constants::CHANNELS;
use crate::shared::mean_color::MeanColor;

/// Zero-initialized `(size, bar_count * bar_thickness, 3)` canvas that
/// receives one vertical bar per sampled frame.
///
/// The buffer does not enforce write order; the pipeline writes bars at
/// strictly increasing indices. [`finalize`](Self::finalize) consumes the
/// buffer, so the optional rotation can only happen once.
#[derive(Debug)]
pub struct ColorMapBuffer {
    pixels: Array3<f64>,
    bar_count: usize,
    bar_thickness: usize,
}

impl ColorMapBuffer {
    pub fn create(
        size: usize,
        bar_count: usize,
        bar_thickness: usize,
    ) -> Result<Self, ColorMapError> {
        let invalid = || ColorMapError::InvalidDimensions {
            size,
            bar_count,
            bar_thickness,
        };

        if size == 0 || bar_count == 0 || bar_thickness == 0 {
            return Err(invalid());
        }
        let width = bar_count.checked_mul(bar_thickness).ok_or_else(invalid)?;
        // Encoders address pixels with u32.
        if u32::try_from(width).is_err() || u32::try_from(size).is_err() {
            return Err(invalid());
        }
        size.checked_mul(width)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(invalid)?;

        Ok(Self {
            pixels: Array3::zeros((size, width, CHANNELS)),
            bar_count,
            bar_thickness,
        })
    }

    pub fn bar_count(&self) -> usize {
        self.bar_count
    }

    pub fn bar_thickness(&self) -> usize {
        self.bar_thickness
    }

    /// `(rows, columns, channels)` before any rotation.
    pub fn shape(&self) -> (usize, usize, usize) {
        let s = self.pixels.shape();
        (s[0], s[1], s[2])
    }

    /// Fills every row of columns `[index * T, index * T + T)` with `color`.
    ///
    /// Rewriting an index overwrites the previous color.
    pub fn write_bar(&mut self, index: usize, color: MeanColor) -> Result<(), ColorMapError> {
        if index >= self.bar_count {
            return Err(ColorMapError::BarOutOfRange {
                index,
                bar_count: self.bar_count,
            });
        }

        let start = index * self.bar_thickness;
        let end = start + self.bar_thickness;
        for (channel, value) in color.channels().into_iter().enumerate() {
            self.pixels.slice_mut(s![.., start..end, channel]).fill(value);
        }
        Ok(())
    }

    /// Ends the buffer's life, optionally rotating it 90° clockwise.
    ///
    /// After rotation the shape is `(bar_count * T, size, 3)` and the
    /// original top row becomes the rightmost column.
    pub fn finalize(self, rotate: bool) -> ColorMapImage {
        if !rotate {
            return ColorMapImage::new(self.pixels);
        }

        // Transpose, then mirror horizontally: new[r][c] = old[rows - 1 - c][r].
        let rotated = self.pixels.permuted_axes([1, 0, 2]);
        let rotated = rotated.slice(s![.., ..;-1, ..]).as_standard_layout().into_owned();
        ColorMapImage::new(rotated)
    }
}
