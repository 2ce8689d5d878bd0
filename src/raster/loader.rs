// Phase 2: image crate: ファイル -> RGBA RasterImage

use std::path::Path;

use tracing::{debug, error};

use super::RasterImage;
use crate::error::ComicError;

/// Decode an image file into a 4-channel (RGBA) `RasterImage`.
///
/// The decoded width and height are whatever the codec reports. The image
/// name is the file name of `path`.
///
/// # Errors
/// Returns `ComicError::DecodeError` if the file does not exist or the codec
/// cannot parse it. Both cases are logged at error level before returning.
pub fn load_image(path: &Path) -> crate::error::Result<RasterImage> {
    if !path.exists() {
        error!("{} does not exist", path.display());
        return Err(ComicError::decode(format!(
            "{} does not exist",
            path.display()
        )));
    }

    let decoded = image::open(path).map_err(|e| {
        error!("Failed to load image {}: {e}", path.display());
        ComicError::decode(format!("Failed to load image {}: {e}", path.display()))
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let image = RasterImage::from_raw(name, width, height, super::RGBA_CHANNELS, rgba.into_raw())?;

    debug!("Loaded {}", path.display());

    Ok(image)
}
