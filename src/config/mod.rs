pub mod settings;

use settings::Settings;
use std::path::Path;

/// 設定ファイル名（作業ディレクトリ直下）
pub const SETTINGS_FILE: &str = "comic.yaml";

/// 作業ディレクトリから comic.yaml を自動検出して読み込む。
///
/// `<root>/comic.yaml` が存在すれば読み込み、存在しなければデフォルト設定を返す。
/// どちらの場合も寸法の検証を行う。
pub fn load_settings(root: &Path) -> crate::error::Result<Settings> {
    let settings_path = root.join(SETTINGS_FILE);

    let settings = if settings_path.exists() {
        Settings::from_file(&settings_path)?
    } else {
        Settings::default()
    };

    settings.validate()?;
    Ok(settings)
}
