// tests/config_test.rs
use release_check::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
#[serial]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.release_branch, "main");
    assert!(!config.behavior.allow_caution);
    assert!(!config.behavior.allow_dirty_worktree);
}

#[test]
#[serial]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
release_branch = "release"

[behavior]
allow_caution = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.release_branch, "release");
    assert!(config.behavior.allow_caution);
    assert!(!config.behavior.allow_dirty_worktree);
}

#[test]
#[serial]
fn test_behavior_config_from_fixture() {
    let config = load_config(Some("tests/fixtures/config_with_behavior.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.release_branch, "trunk");
    assert!(config.behavior.allow_caution);
    assert!(config.behavior.allow_dirty_worktree);
}

#[test]
#[serial]
fn test_missing_explicit_config_is_error() {
    let err = load_config(Some("tests/fixtures/no_such_config.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
#[serial]
fn test_invalid_config_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"release_branch = [").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_config_in_current_directory_is_found() {
    let original_dir = std::env::current_dir().unwrap();
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "release_branch = \"stable\"\n",
    )
    .unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap().release_branch, "stable");
}
