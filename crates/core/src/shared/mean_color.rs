/// Per-channel arithmetic mean of a frame, on the byte scale (0.0-255.0).
///
/// Channels are kept unrounded until the image is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl MeanColor {
    pub const BLACK: MeanColor = MeanColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_channels(channels: [f64; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Rounds each channel to the nearest byte, clamping to 0-255.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.channels().map(|c| c.round().clamp(0.0, 255.0) as u8)
    }
}
