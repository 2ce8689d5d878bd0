// Phase 4: 中綴じ面付け: 2ページ -> 見開き1枚

use crate::error::ComicError;
use crate::raster::RasterImage;

/// Canvas fill value (opaque white in every channel).
const CANVAS_FILL: u8 = 0xff;

/// Page index pairs `(left, right)` for saddle-stitch imposition.
///
/// Spread `i` puts page `page_count - 1 - i` on the left and page `i` on the
/// right, so the outermost sheet comes first.
///
/// # Errors
/// Returns `ComicError::LayoutError` if `page_count` is not a multiple of 4.
pub fn spread_pairs(page_count: usize) -> crate::error::Result<Vec<(usize, usize)>> {
    if page_count % 4 != 0 {
        return Err(ComicError::layout(format!(
            "Cannot create printing layout. Incorrect number of pages: {page_count} is not a multiple of 4"
        )));
    }

    Ok((0..page_count / 2)
        .map(|i| (page_count - 1 - i, i))
        .collect())
}

/// File name of spread `index`.
pub fn spread_file_name(index: usize) -> String {
    format!("page_{index}.png")
}

/// Place `left` and `right` side by side on a double-width canvas.
///
/// The canvas takes its height and channel count from `left` and starts out
/// opaque white. Only colour channels are copied. In layouts with alpha (LA,
/// RGBA) the last channel keeps the fill value, so the spread is fully opaque.
///
/// # Errors
/// Returns `ComicError::LayoutError` if the two pages differ in size or
/// channel layout.
pub fn compose_spread(
    name: impl Into<String>,
    left: &RasterImage,
    right: &RasterImage,
) -> crate::error::Result<RasterImage> {
    if left.width() != right.width()
        || left.height() != right.height()
        || left.channels() != right.channels()
    {
        return Err(ComicError::layout(format!(
            "spread pages differ: {} is {}x{}x{}, {} is {}x{}x{}",
            left.name(),
            left.width(),
            left.height(),
            left.channels(),
            right.name(),
            right.width(),
            right.height(),
            right.channels()
        )));
    }

    let width = left.width().checked_mul(2).ok_or_else(|| {
        ComicError::layout(format!("spread width overflows for {}", left.name()))
    })?;
    let channels = left.channels() as usize;
    let mut canvas = RasterImage::filled(name, width, left.height(), left.channels(), CANVAS_FILL)?;

    let canvas_stride = canvas.stride();
    let image_stride = left.stride();
    // Alpha is the last channel of LA and RGBA only; L and RGB copy every channel.
    let colour_channels = if channels == 2 || channels == 4 { channels - 1 } else { channels };

    let dst = canvas.pixels_mut();
    for y in 0..left.height() as usize {
        let row = y * canvas_stride;
        let src_row = y * image_stride;
        for (offset, page) in [(0, left), (image_stride, right)] {
            let src = &page.pixels()[src_row..src_row + image_stride];
            let out = &mut dst[row + offset..row + offset + image_stride];
            for (out_px, src_px) in out.chunks_exact_mut(channels).zip(src.chunks_exact(channels)) {
                out_px[..colour_channels].copy_from_slice(&src_px[..colour_channels]);
            }
        }
    }

    Ok(canvas)
}
