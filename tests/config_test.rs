// Phase 1: 設定ファイル解析テスト

use std::io::Write;

use comic_creator::config::load_settings;
use comic_creator::config::settings::{A3, PageSize, Settings};
use comic_creator::error::ComicError;

// ============================================================
// 1. Settings 構造体のデシリアライズ
// ============================================================

#[test]
fn test_settings_full_yaml() {
    let yaml = r#"
page_size:
  width: 31.7
  height: 44.0
trim_size:
  width: 29.7
  height: 42.0
parallel_workers: 4
online: false
print: false
"#;
    let settings = Settings::from_yaml(yaml).expect("should parse full YAML");
    assert_eq!(settings.page_size, PageSize::new(31.7, 44.0));
    assert_eq!(settings.trim_size, PageSize::new(29.7, 42.0));
    assert_eq!(settings.parallel_workers, 4);
    assert!(!settings.online);
    assert!(!settings.print);
}

#[test]
fn test_settings_empty_yaml() {
    // 空YAML（"{}" はserde_ymlで空のマッピングを意味する）
    let settings = Settings::from_yaml("{}").expect("should use defaults for empty YAML");
    assert_eq!(settings.page_size, A3);
    assert_eq!(settings.trim_size, A3);
    assert_eq!(settings.parallel_workers, 0);
    assert!(settings.online);
    assert!(settings.print);
}

#[test]
fn test_settings_partial_yaml() {
    let yaml = r#"
parallel_workers: 2
"#;
    let settings = Settings::from_yaml(yaml).expect("should fill missing with defaults");
    assert_eq!(settings.parallel_workers, 2);
    // 残りはデフォルト値
    assert_eq!(settings.page_size, A3);
    assert_eq!(settings.trim_size, A3);
    assert!(settings.online);
    assert!(settings.print);
}

#[test]
fn test_settings_invalid_yaml() {
    let result = Settings::from_yaml("page_size: wide");
    assert!(
        matches!(result, Err(ComicError::ConfigError(_))),
        "should fail with ConfigError, got {result:?}"
    );
}

// ============================================================
// 2. 寸法の検証
// ============================================================

#[test]
fn test_validate_default_settings() {
    Settings::default()
        .validate()
        .expect("default settings should be valid");
}

#[test]
fn test_validate_trim_wider_than_page() {
    let settings = Settings {
        page_size: PageSize::new(20.0, 30.0),
        trim_size: PageSize::new(21.0, 30.0),
        ..Settings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(ComicError::ConfigError(_))
    ));
}

#[test]
fn test_validate_trim_taller_than_page() {
    let settings = Settings {
        page_size: PageSize::new(20.0, 30.0),
        trim_size: PageSize::new(20.0, 31.0),
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_zero_dimension() {
    let settings = Settings {
        page_size: PageSize::new(0.0, 30.0),
        trim_size: PageSize::new(0.0, 30.0),
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}

// ============================================================
// 3. comic.yaml の自動検出
// ============================================================

#[test]
fn test_load_settings_without_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let settings = load_settings(dir.path()).expect("should fall back to defaults");
    assert_eq!(settings.page_size, A3);
    assert!(settings.online);
}

#[test]
fn test_load_settings_reads_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut file = std::fs::File::create(dir.path().join("comic.yaml")).expect("create yaml");
    writeln!(file, "parallel_workers: 3\nprint: false").expect("write yaml");

    let settings = load_settings(dir.path()).expect("should read comic.yaml");
    assert_eq!(settings.parallel_workers, 3);
    assert!(!settings.print);
}

#[test]
fn test_load_settings_rejects_invalid_geometry() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let yaml = r#"
page_size:
  width: 10.0
  height: 10.0
trim_size:
  width: 12.0
  height: 10.0
"#;
    std::fs::write(dir.path().join("comic.yaml"), yaml).expect("write yaml");

    let result = load_settings(dir.path());
    assert!(
        matches!(result, Err(ComicError::ConfigError(_))),
        "trim larger than page should be rejected"
    );
}
