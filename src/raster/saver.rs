// Phase 2: image crate: RasterImage -> PNG ファイル

use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use tracing::{debug, error};

use super::RasterImage;
use crate::error::ComicError;

fn color_type(channels: u8) -> crate::error::Result<ExtendedColorType> {
    match channels {
        1 => Ok(ExtendedColorType::L8),
        2 => Ok(ExtendedColorType::La8),
        3 => Ok(ExtendedColorType::Rgb8),
        4 => Ok(ExtendedColorType::Rgba8),
        n => Err(ComicError::encode(format!(
            "unsupported channel count for PNG: {n}"
        ))),
    }
}

/// Encode `image` as PNG and write it to `path`.
///
/// The output is always PNG regardless of the extension of `path`. An
/// existing file at `path` is overwritten.
///
/// # Errors
/// Returns `ComicError::EncodeError` if encoding or writing fails.
pub fn save_image(image: &RasterImage, path: &Path) -> crate::error::Result<()> {
    image::save_buffer_with_format(
        path,
        image.pixels(),
        image.width(),
        image.height(),
        color_type(image.channels())?,
        ImageFormat::Png,
    )
    .map_err(|e| {
        error!("Failed to save {}: {e}", path.display());
        ComicError::encode(format!("Failed to save {}: {e}", path.display()))
    })?;

    debug!("Saved {}", path.display());

    Ok(())
}
