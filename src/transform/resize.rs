// Phase 3: オンライン用縮小（幅固定・縦横比維持）

use image::imageops::FilterType;

use crate::error::ComicError;
use crate::raster::RasterImage;

/// Target width of the online variant in pixels.
pub const ONLINE_WIDTH: u32 = 1024;

/// Height that keeps the aspect ratio of a `width x height` source at
/// `target_width` (integer truncation).
///
/// # Errors
/// Returns `ComicError::TransformError` if the height does not fit in `u32`.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> crate::error::Result<u32> {
    if width == 0 {
        return Ok(0);
    }
    let h1 = target_width as u64 * height as u64 / width as u64;
    u32::try_from(h1).map_err(|_| {
        ComicError::transform(format!(
            "scaled height {h1} of {width}x{height} at width {target_width} is too large"
        ))
    })
}

/// Resample `image` to `target_width`, preserving the aspect ratio.
///
/// Resampling uses Lanczos3. Narrower sources are scaled up; there is no
/// guard against upscaling. The channel layout of the source is kept.
///
/// # Errors
/// Returns `ComicError::TransformError` if the target width or the derived
/// height is zero, or the derived height overflows `u32`.
pub fn resize_to_width(
    image: &RasterImage,
    target_width: u32,
) -> crate::error::Result<RasterImage> {
    let (w0, h0) = (image.width(), image.height());
    let h1 = scaled_height(w0, h0, target_width)?;

    if target_width == 0 || h1 == 0 {
        return Err(ComicError::transform(format!(
            "cannot resize {} ({}x{}) to width {}: empty result",
            image.name(),
            w0,
            h0,
            target_width
        )));
    }

    let resized = image
        .to_dynamic()?
        .resize_exact(target_width, h1, FilterType::Lanczos3);

    RasterImage::from_dynamic(image.name(), resized)
}
