// Phase 7: ページ単位処理: 読込 -> 変換 -> 保存

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::settings::Settings;
use crate::error::ComicError;
use crate::raster::loader::load_image;
use crate::raster::saver::save_image;
use crate::transform::crop::crop_to_trim;
use crate::transform::resize::{ONLINE_WIDTH, resize_to_width};
use crate::transform::spread::{compose_spread, spread_file_name};

/// One spread of the print layout.
#[derive(Debug, Clone)]
pub struct SpreadTask {
    pub index: usize,
    pub left: PathBuf,
    pub right: PathBuf,
}

/// Online variant of one page: load -> resize to [`ONLINE_WIDTH`] -> save
/// under the same file name in `out_dir`.
///
/// Returns the written path.
pub fn process_online_page(page: &Path, out_dir: &Path) -> crate::error::Result<PathBuf> {
    let file_name = page.file_name().ok_or_else(|| {
        ComicError::invalid_image(format!("{} has no file name", page.display()))
    })?;

    let src = load_image(page)?;
    let dst = resize_to_width(&src, ONLINE_WIDTH)?;

    let out_path = out_dir.join(file_name);
    save_image(&dst, &out_path)?;
    Ok(out_path)
}

/// Print spread: load both pages -> crop each to trim size -> compose ->
/// save as `page_<index>.png` in `out_dir`.
///
/// Returns the written path. A page that fails to load stops this spread
/// only.
pub fn process_spread(
    task: &SpreadTask,
    out_dir: &Path,
    settings: &Settings,
) -> crate::error::Result<PathBuf> {
    trace!(
        "Printing {} and {}",
        task.left.display(),
        task.right.display()
    );

    let file_name = spread_file_name(task.index);

    let left = load_image(&task.left)?;
    let right = load_image(&task.right)?;

    let left = crop_to_trim(&left, settings.page_size, settings.trim_size)?;
    let right = crop_to_trim(&right, settings.page_size, settings.trim_size)?;

    let spread = compose_spread(file_name.as_str(), &left, &right)?;

    let out_path = out_dir.join(&file_name);
    save_image(&spread, &out_path)?;
    Ok(out_path)
}
