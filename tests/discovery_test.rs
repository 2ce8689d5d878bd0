// Phase 6: ページ列挙・出力ディレクトリのテスト

use std::fs;

use comic_creator::error::ComicError;
use comic_creator::pipeline::discovery::fetch_pages;
use comic_creator::pipeline::output::recreate_dir;

#[test]
fn test_fetch_pages_sorted_lexicographically() {
    let dir = tempfile::tempdir().expect("create temp dir");
    // 作成順はソート順と異なる
    for name in ["010.png", "002.png", "001.png", "b.jpg", "a.txt"] {
        fs::write(dir.path().join(name), b"x").expect("write page");
    }

    let pages = fetch_pages(dir.path()).expect("fetch should succeed");
    let names: Vec<_> = pages
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["001.png", "002.png", "010.png", "a.txt", "b.jpg"]);
    assert!(pages.iter().all(|p| p.starts_with(dir.path())));
}

#[test]
fn test_fetch_pages_skips_subdirectories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("001.png"), b"x").expect("write page");
    fs::create_dir(dir.path().join("extras")).expect("create subdir");
    fs::write(dir.path().join("extras").join("002.png"), b"x").expect("write nested page");

    let pages = fetch_pages(dir.path()).expect("fetch should succeed");
    assert_eq!(pages, vec![dir.path().join("001.png")]);
}

#[test]
fn test_fetch_pages_empty_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let pages = fetch_pages(dir.path()).expect("empty dir is not an error here");
    assert!(pages.is_empty());
}

#[test]
fn test_fetch_pages_missing_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = fetch_pages(&dir.path().join("pages"));
    assert!(
        matches!(result, Err(ComicError::MissingInput(_))),
        "missing pages dir should be MissingInput"
    );
}

#[test]
fn test_recreate_dir_clears_previous_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("online");
    fs::create_dir_all(out.join("nested")).expect("create old output");
    fs::write(out.join("stale.png"), b"old").expect("write stale file");

    let created = recreate_dir(&out).expect("recreate should succeed");
    assert_eq!(created, out);
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).expect("read dir").count(), 0);
}

#[test]
fn test_recreate_dir_creates_missing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("print");

    recreate_dir(&out).expect("recreate should succeed");
    assert!(out.is_dir());
}
