//! Integration tests for Settings layered loading.
//!
//! Precedence: defaults < global file < local `.wordtree.toml` < WORDTREE_* env < --store.
//! These tests use explicit temp files instead of the real XDG config directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use wordtree::config::{local_config_path, Settings, DEFAULT_STORE_FILE};

#[test]
fn given_no_files_when_load_then_defaults() {
    let settings = Settings::load_from(None, None).expect("load settings");

    assert_eq!(settings.store_path, PathBuf::from(DEFAULT_STORE_FILE));
    assert_eq!(settings.prompt, "> ");
    assert!(settings.color);
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    let global_dir = TempDir::new().unwrap();
    let global = global_dir.path().join("wordtree.toml");
    fs::write(&global, "store_path = \"/srv/dict/words.txt\"\ncolor = false\n").unwrap();

    let settings = Settings::load_from(Some(global.as_path()), None).expect("load settings");

    assert_eq!(settings.store_path, PathBuf::from("/srv/dict/words.txt"));
    assert!(!settings.color);
    assert_eq!(settings.prompt, "> ");
}

#[test]
fn given_local_config_when_load_then_wins_over_global() {
    let global_dir = TempDir::new().unwrap();
    let global = global_dir.path().join("wordtree.toml");
    fs::write(&global, "store_path = \"/global/words.txt\"\nprompt = \"g> \"\n").unwrap();

    let local_dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(local_dir.path()),
        "store_path = \"/local/words.txt\"\n",
    )
    .unwrap();

    let settings =
        Settings::load_from(Some(global.as_path()), Some(local_dir.path())).expect("load settings");

    assert_eq!(settings.store_path, PathBuf::from("/local/words.txt"));
    // not set locally, inherited from global
    assert_eq!(settings.prompt, "g> ");
}

#[test]
fn given_local_dir_without_config_when_load_then_defaults() {
    let local_dir = TempDir::new().unwrap();

    let settings = Settings::load_from(None, Some(local_dir.path())).expect("load settings");

    assert_eq!(settings.store_path, PathBuf::from(DEFAULT_STORE_FILE));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let local_dir = TempDir::new().unwrap();
    fs::write(local_config_path(local_dir.path()), "store_path = [unclosed").unwrap();

    let err = Settings::load_from(None, Some(local_dir.path())).unwrap_err();

    assert!(err.to_string().contains("config error"), "{err}");
}

#[test]
fn given_cli_store_when_applied_after_load_then_wins() {
    let local_dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(local_dir.path()),
        "store_path = \"/local/words.txt\"\n",
    )
    .unwrap();

    let settings = Settings::load_from(None, Some(local_dir.path()))
        .unwrap()
        .with_store_path(Some(Path::new("/cli/words.txt")));

    assert_eq!(settings.store_path, PathBuf::from("/cli/words.txt"));
}

#[test]
fn given_settings_when_serialized_then_toml_contains_store_path() {
    let settings = Settings::default();
    let text = settings.to_toml().unwrap();

    assert!(text.contains("store_path = \"words.txt\""));
}
