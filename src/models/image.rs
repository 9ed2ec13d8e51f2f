use crate::error::RecoveryError;

/// Integer BT.601 luminance weights: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

/// Owned 2D grid of 8-bit pixel samples, either luminance (1 channel) or
/// RGB (3 channels), stored row-major.
///
/// Images are immutable once constructed: every transform in this crate
/// allocates a fresh `Image` and leaves its input untouched, so a caller's
/// image is never mutated behind its back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Image {
    /// Create an image from a raw buffer.
    ///
    /// `channels` must be 1 (luminance) or 3 (RGB) and `data` must hold
    /// exactly `width * height * channels` bytes.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, RecoveryError> {
        if channels != 1 && channels != 3 {
            return Err(RecoveryError::UnsupportedChannels(channels));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(RecoveryError::BufferMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a single-channel image from raw luminance bytes
    pub fn from_luma8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RecoveryError> {
        Self::from_raw(width, height, 1, data)
    }

    /// Create a three-channel image from raw RGB bytes (3 bytes per pixel)
    pub fn from_rgb8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RecoveryError> {
        Self::from_raw(width, height, 3, data)
    }

    /// Convert a decoded `image` crate value.
    ///
    /// Grayscale inputs stay single-channel; everything else is converted
    /// to RGB.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        match img {
            image::DynamicImage::ImageLuma8(gray) => Self {
                width: gray.width() as usize,
                height: gray.height() as usize,
                channels: 1,
                data: gray.as_raw().clone(),
            },
            other => {
                let rgb = other.to_rgb8();
                Self {
                    width: rgb.width() as usize,
                    height: rgb.height() as usize,
                    channels: 3,
                    data: rgb.into_raw(),
                }
            }
        }
    }

    /// Allocate a zero-filled image. Transforms write into these; a
    /// zero-size canvas is representable (degenerate transform outputs)
    /// but rejected by `recover`/`assess` as caller input.
    pub(crate) fn zeroed(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (1 = luminance, 3 = RGB)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True if the image has zero width or height
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw sample buffer, row-major
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Samples of the pixel at (x, y); length equals `channels()`
    ///
    /// # Panics
    /// Panics if (x, y) is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let idx = (y * self.width + x) * self.channels;
        &self.data[idx..idx + self.channels]
    }

    /// Luminance of the pixel at (x, y)
    ///
    /// Single-channel images return the sample directly; RGB images are
    /// weighted with the integer BT.601 coefficients.
    ///
    /// # Panics
    /// Panics if (x, y) is outside the image.
    pub fn luma(&self, x: usize, y: usize) -> u8 {
        let idx = (y * self.width + x) * self.channels;
        if self.channels == 1 {
            self.data[idx]
        } else {
            let r = self.data[idx] as u32;
            let g = self.data[idx + 1] as u32;
            let b = self.data[idx + 2] as u32;
            ((COEF_R * r + COEF_G * g + COEF_B * b) >> 8).min(255) as u8
        }
    }

    pub(crate) fn put_pixel(&mut self, x: usize, y: usize, samples: &[u8]) {
        let idx = (y * self.width + x) * self.channels;
        self.data[idx..idx + self.channels].copy_from_slice(samples);
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
