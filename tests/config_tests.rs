//! Tests for option loading and the fluent builder

use inline_sass::{CssStyle, InlineSassError, InlineSassOptions};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_builder_with_all_optional_fields() {
    let temp_dir = TempDir::new().unwrap();
    let options = InlineSassOptions::builder()
        .url("https://example.com/mail/")
        .delete_temp_dir(false)
        .temp_root(temp_dir.path())
        .inline_timeout_secs(30)
        .style(CssStyle::Compressed)
        .load_path("vendor/scss")
        .quiet(true)
        .inline_style_tags(false)
        .keep_style_tags(true)
        .keep_link_tags(false)
        .load_remote_stylesheets(false)
        .extra_css("td { padding: 0; }")
        .preallocate_node_capacity(128)
        .build()
        .unwrap();

    assert_eq!(options.url(), Some("https://example.com/mail/"));
    assert!(!options.delete_temp_dir());
    assert_eq!(options.temp_root(), Some(temp_dir.path()));
    assert_eq!(
        options.inline_timeout(),
        Some(std::time::Duration::from_secs(30))
    );
    assert_eq!(options.sass().style, CssStyle::Compressed);
    assert_eq!(
        options.sass().load_paths,
        vec![PathBuf::from("vendor/scss")]
    );
    assert!(options.sass().quiet);

    let inliner = options.inliner();
    assert!(!inliner.inline_style_tags);
    assert!(inliner.keep_style_tags);
    assert!(!inliner.keep_link_tags);
    assert!(!inliner.load_remote_stylesheets);
    assert_eq!(inliner.extra_css.as_deref(), Some("td { padding: 0; }"));
    assert_eq!(inliner.preallocate_node_capacity, 128);
}

#[test]
fn test_zero_timeout_rejected() {
    let err = InlineSassOptions::builder()
        .inline_timeout_secs(0)
        .build()
        .unwrap_err();
    assert!(matches!(err, InlineSassError::Config(_)));
}

#[test]
fn test_load_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inline-sass.json");
    std::fs::write(
        &path,
        r#"{ "deleteTempDir": false, "loadRemoteStylesheets": false, "inlineTimeoutSecs": 5 }"#,
    )
    .unwrap();

    let options = InlineSassOptions::from_json_file(&path).unwrap();

    assert!(!options.delete_temp_dir());
    assert!(!options.inliner().load_remote_stylesheets);
    assert!(options.inliner().keep_link_tags);
    assert_eq!(
        options.inline_timeout(),
        Some(std::time::Duration::from_secs(5))
    );
}

#[test]
fn test_missing_json_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let err = InlineSassOptions::from_json_file(&path).unwrap_err();
    assert!(matches!(err, InlineSassError::Io { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_invalid_json_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"{ "deleteTempDir": "yes" }"#).unwrap();

    let err = InlineSassOptions::from_json_file(&path).unwrap_err();
    match err {
        InlineSassError::Config(message) => assert!(message.contains("broken.json")),
        other => panic!("expected Config error, got {other:?}"),
    }
}
