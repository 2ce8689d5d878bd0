// Phase 2: デコード済みビットマップ（名前 + 寸法 + チャンネル数 + 画素列）

pub mod loader;
pub mod saver;

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::error::ComicError;

/// Channel count produced by the loader (RGBA).
pub const RGBA_CHANNELS: u8 = 4;

/// An in-memory decoded bitmap.
///
/// Pixels are row-major with interleaved channels. The buffer length always
/// equals `width * height * channels`; every constructor checks it, and the
/// fields are private so nothing can break it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    name: String,
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

/// Byte length of a `width x height x channels` buffer, or `None` on overflow.
fn buffer_len(width: u32, height: u32, channels: u8) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(channels as usize))
}

impl RasterImage {
    /// Wrap an existing pixel buffer.
    ///
    /// # Errors
    /// Returns `ComicError::InvalidImage` if `channels` is not 1-4 or the
    /// buffer length does not match the dimensions.
    pub fn from_raw(
        name: impl Into<String>,
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> crate::error::Result<Self> {
        if !(1..=RGBA_CHANNELS).contains(&channels) {
            return Err(ComicError::invalid_image(format!(
                "channel count must be 1-4, got {}",
                channels
            )));
        }

        let expected_len = buffer_len(width, height, channels).ok_or_else(|| {
            ComicError::invalid_image(format!(
                "Overflow computing buffer size for {}x{}x{} image",
                width, height, channels
            ))
        })?;

        if pixels.len() != expected_len {
            return Err(ComicError::invalid_image(format!(
                "pixel data size mismatch: expected {} bytes, got {}",
                expected_len,
                pixels.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Allocate an image with every byte set to `value`.
    pub fn filled(
        name: impl Into<String>,
        width: u32,
        height: u32,
        channels: u8,
        value: u8,
    ) -> crate::error::Result<Self> {
        let len = buffer_len(width, height, channels).ok_or_else(|| {
            ComicError::invalid_image(format!(
                "Overflow computing buffer size for {}x{}x{} image",
                width, height, channels
            ))
        })?;
        Self::from_raw(name, width, height, channels, vec![value; len])
    }

    /// Take ownership of a decoded `DynamicImage`, keeping its channel layout.
    ///
    /// 16-bit and float images are narrowed to 8-bit RGBA.
    pub fn from_dynamic(name: impl Into<String>, image: DynamicImage) -> crate::error::Result<Self> {
        let (width, height) = (image.width(), image.height());
        let (channels, pixels) = match image {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other => (RGBA_CHANNELS, other.to_rgba8().into_raw()),
        };
        Self::from_raw(name, width, height, channels, pixels)
    }

    /// Borrow the pixels as a `DynamicImage` of the matching channel layout.
    pub fn to_dynamic(&self) -> crate::error::Result<DynamicImage> {
        let (w, h) = (self.width, self.height);
        let data = self.pixels.clone();
        let image = match self.channels {
            1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            _ => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        };
        image.ok_or_else(|| {
            ComicError::invalid_image(format!("Failed to wrap {} as an image buffer", self.name))
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// The `channels` bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let start = y as usize * self.stride() + x as usize * c;
        &self.pixels[start..start + c]
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
