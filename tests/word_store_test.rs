//! Tests for FileWordStore on a real filesystem

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use wordtree::infrastructure::store::FileWordStore;
use wordtree::infrastructure::traits::{RealFileSystem, WordStore};
use wordtree::infrastructure::InfraError;

fn open_store(dir: &TempDir, name: &str) -> (FileWordStore, PathBuf) {
    let path = dir.path().join(name);
    let store = FileWordStore::open(Arc::new(RealFileSystem), &path).expect("open store");
    (store, path)
}

#[test]
fn given_missing_file_when_opening_then_creates_empty_store() {
    let temp = TempDir::new().unwrap();
    let (store, path) = open_store(&temp, "nested/dir/words.txt");

    assert!(path.is_file());
    assert!(store.read_all().unwrap().is_empty());
}

#[test]
fn given_existing_file_when_opening_then_content_kept() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("words.txt"), "x,y,z,").unwrap();

    let (store, _) = open_store(&temp, "words.txt");

    assert_eq!(store.read_all().unwrap(), vec!["x", "y", "z"]);
}

#[test]
fn given_directory_at_store_path_when_opening_then_store_missing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("words.txt");
    fs::create_dir(&dir).unwrap();

    let err = FileWordStore::open(Arc::new(RealFileSystem), &dir).unwrap_err();

    assert!(matches!(err, InfraError::StoreMissing { .. }));
}

#[test]
fn given_uncreatable_parent_when_opening_then_store_missing() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    fs::write(&blocker, "").unwrap();

    // parent "directory" is a regular file
    let err = FileWordStore::open(Arc::new(RealFileSystem), &blocker.join("words.txt")).unwrap_err();

    assert!(matches!(err, InfraError::StoreMissing { .. }));
}

#[test]
fn given_words_when_appended_then_file_is_comma_delimited() {
    let temp = TempDir::new().unwrap();
    let (store, path) = open_store(&temp, "words.txt");

    store.append("apple").unwrap();
    store.append("banana").unwrap();
    store.append("   ").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "apple,banana,");
}

#[test]
fn given_duplicate_entries_when_removing_then_only_first_occurrence_removed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("words.txt"), "cat,dog,cat,").unwrap();
    let (store, path) = open_store(&temp, "words.txt");

    assert!(store.remove("cat").unwrap());

    assert_eq!(fs::read_to_string(path).unwrap(), "dog,cat,");
}

#[test]
fn given_absent_word_when_removing_then_file_untouched() {
    let temp = TempDir::new().unwrap();
    // no trailing delimiter, would be normalized by a rewrite
    fs::write(temp.path().join("words.txt"), "cat,dog").unwrap();
    let (store, path) = open_store(&temp, "words.txt");

    assert!(!store.remove("bird").unwrap());

    assert_eq!(fs::read_to_string(path).unwrap(), "cat,dog");
}

#[test]
fn given_deleted_store_file_when_reading_then_error() {
    let temp = TempDir::new().unwrap();
    let (store, path) = open_store(&temp, "words.txt");
    fs::remove_file(path).unwrap();

    assert!(store.read_all().is_err());
    assert!(store.remove("x").is_err());
}
