// Phase 6: 出力ディレクトリの再作成

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// オンライン用出力ディレクトリ名
pub const ONLINE_DIR: &str = "online";
/// 印刷用出力ディレクトリ名
pub const PRINT_DIR: &str = "print";

/// 出力ディレクトリを空の状態で作り直す。
///
/// 既に存在する場合は中身ごと削除してから作成する（前回の出力は残らない）。
pub fn recreate_dir(dir: &Path) -> crate::error::Result<PathBuf> {
    if dir.exists() {
        debug!("Removing previous output {}", dir.display());
        fs::remove_dir_all(dir)?;
    }

    fs::create_dir_all(dir)?;

    Ok(dir.to_path_buf())
}
