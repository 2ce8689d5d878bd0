// Phase 6: 入力ページ列挙（パスの辞書順）

use std::path::{Path, PathBuf};

use crate::error::ComicError;

/// 入力ページを置くディレクトリ名（作業ディレクトリ直下）
pub const PAGES_DIR: &str = "pages";

/// List the page files in `dir`, sorted lexicographically by full path.
///
/// Subdirectories are skipped and not descended into. Files are not
/// filtered by extension; undecodable files fail later, in the loader.
///
/// # Errors
/// Returns `ComicError::MissingInput` if `dir` does not exist or is not a
/// directory, and `ComicError::IoError` if it cannot be read.
pub fn fetch_pages(dir: &Path) -> crate::error::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ComicError::missing_input(format!(
            "pages directory {} does not exist",
            dir.display()
        )));
    }

    let mut pages = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            continue;
        }
        pages.push(path);
    }

    pages.sort();
    Ok(pages)
}
