use ndarray::Axis;

use crate::shared::frame::Frame;
use crate::shared::mean_color::MeanColor;

/// Domain interface for collapsing a frame into a single color.
pub trait FrameReducer: Send {
    fn reduce(&self, frame: &Frame) -> MeanColor;
}

/// Arithmetic mean of each RGB channel over every pixel of the frame.
///
/// Sums are accumulated in `f64`, so large frames neither overflow nor
/// lose the fractional part of the mean.
pub struct MeanColorReducer;

impl FrameReducer for MeanColorReducer {
    fn reduce(&self, frame: &Frame) -> MeanColor {
        let count = frame.pixel_count();
        if count == 0 {
            return MeanColor::BLACK;
        }

        let pixels = frame.as_ndarray();
        let mut means = [0.0f64; 3];
        for (mean, channel) in means.iter_mut().zip(pixels.axis_iter(Axis(2))) {
            let sum: f64 = channel.iter().map(|&v| f64::from(v)).sum();
            *mean = sum / count as f64;
        }
        MeanColor::from_channels(means)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::black([0, 0, 0])]
    #[case::white([255, 255, 255])]
    #[case::orange([200, 100, 50])]
    fn test_uniform_frame_reduces_to_its_color(#[case] rgb: [u8; 3]) {
        let frame = Frame::filled(16, 9, rgb, 0);
        let color = MeanColorReducer.reduce(&frame);
        assert_relative_eq!(color.r, f64::from(rgb[0]));
        assert_relative_eq!(color.g, f64::from(rgb[1]));
        assert_relative_eq!(color.b, f64::from(rgb[2]));
    }

    #[test]
    fn test_channels_are_averaged_independently() {
        // 2x1 frame: red pixel and blue pixel
        let frame = Frame::new(vec![255, 0, 0, 0, 0, 255], 2, 1, 0);
        let color = MeanColorReducer.reduce(&frame);
        assert_relative_eq!(color.r, 127.5);
        assert_relative_eq!(color.g, 0.0);
        assert_relative_eq!(color.b, 127.5);
    }

    #[test]
    fn test_mean_keeps_fraction() {
        // 3x1 grey ramp: 0, 1, 1 -> 2/3
        let frame = Frame::new(vec![0, 0, 0, 1, 1, 1, 1, 1, 1], 3, 1, 0);
        let color = MeanColorReducer.reduce(&frame);
        assert_relative_eq!(color.g, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_large_bright_frame_does_not_overflow() {
        let frame = Frame::filled(3840, 2160, [255, 254, 253], 0);
        let color = MeanColorReducer.reduce(&frame);
        assert_relative_eq!(color.r, 255.0);
        assert_relative_eq!(color.g, 254.0);
        assert_relative_eq!(color.b, 253.0);
    }

    #[test]
    fn test_empty_frame_is_black() {
        let frame = Frame::filled(0, 0, [9, 9, 9], 0);
        assert_eq!(MeanColorReducer.reduce(&frame), MeanColor::BLACK);
    }
}
