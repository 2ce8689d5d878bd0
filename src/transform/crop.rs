// Phase 3: 断裁: 用紙サイズ -> 仕上がりサイズ（中央切り出し）

use crate::config::settings::PageSize;
use crate::error::ComicError;
use crate::raster::RasterImage;

/// Output dimensions and top-left offset of the trim area inside a
/// `width x height` source.
///
/// Returns `(w1, h1, start_x, start_y)`.
pub fn trim_rect(width: u32, height: u32, page: PageSize, trim: PageSize) -> (u32, u32, u32, u32) {
    // Ratio first so that trim == page is exactly 1.0.
    let w1 = (width as f64 * (trim.width / page.width)).floor() as u32;
    let h1 = (height as f64 * (trim.height / page.height)).floor() as u32;
    let start_x = (0.5 * (width - w1.min(width)) as f64).floor() as u32;
    let start_y = (0.5 * (height - h1.min(height)) as f64).floor() as u32;
    (w1, h1, start_x, start_y)
}

/// Cut the bleed margin off a page, keeping the centred trim area.
///
/// Pixels are copied channel for channel without interpolation. When
/// `trim == page` the result is a byte-identical copy of `image`.
///
/// # Errors
/// Returns `ComicError::TransformError` if the trim area rounds down to zero
/// pixels, or is larger than the source (trim bigger than page).
pub fn crop_to_trim(
    image: &RasterImage,
    page: PageSize,
    trim: PageSize,
) -> crate::error::Result<RasterImage> {
    let (w0, h0) = (image.width(), image.height());
    let (w1, h1, start_x, start_y) = trim_rect(w0, h0, page, trim);

    if w1 == 0 || h1 == 0 {
        return Err(ComicError::transform(format!(
            "trim area of {} is empty ({}x{} -> {}x{})",
            image.name(),
            w0,
            h0,
            w1,
            h1
        )));
    }
    if w1 > w0 || h1 > h0 {
        return Err(ComicError::transform(format!(
            "trim area {}x{} exceeds {} ({}x{})",
            w1,
            h1,
            image.name(),
            w0,
            h0
        )));
    }

    let channels = image.channels() as usize;
    let src_stride = image.stride();
    let row_len = w1 as usize * channels;
    let src = image.pixels();

    let mut pixels = Vec::with_capacity(row_len * h1 as usize);
    for y in 0..h1 as usize {
        let start = (start_y as usize + y) * src_stride + start_x as usize * channels;
        pixels.extend_from_slice(&src[start..start + row_len]);
    }

    RasterImage::from_raw(image.name(), w1, h1, image.channels(), pixels)
}
