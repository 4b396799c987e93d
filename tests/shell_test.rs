//! Tests for the interactive shell, driven through in-memory input and output

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use wordtree::application::services::Dictionary;
use wordtree::cli::shell::Shell;
use wordtree::infrastructure::store::{parse_words, FileWordStore};
use wordtree::infrastructure::traits::RealFileSystem;

fn load(path: &Path) -> Dictionary {
    let store = FileWordStore::open(Arc::new(RealFileSystem), path).expect("open store");
    Dictionary::load(Arc::new(store)).expect("load dictionary")
}

/// Run the shell on `script` and return everything it printed.
fn run_script(dict: &mut Dictionary, script: &str) -> String {
    colored::control::set_override(false);
    let mut output = Vec::new();
    Shell::new(dict, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .expect("shell run");
    String::from_utf8(output).expect("utf8 output")
}

#[test]
fn given_insert_and_list_when_running_then_words_printed_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.txt");
    let mut dict = load(&path);

    let out = run_script(&mut dict, "1\nbanana\n1\napple\n1\ncherry\n4\n0\n");

    assert!(out.contains("inserted 'banana'"));
    assert!(out.contains("words in order: [apple, banana, cherry]"));
    assert!(out.contains("bye"));
    assert_eq!(
        parse_words(&fs::read_to_string(&path).unwrap()),
        vec!["banana", "apple", "cherry"]
    );
}

#[test]
fn given_digit_only_word_when_inserting_then_rejected_and_loop_continues() {
    let temp = TempDir::new().unwrap();
    let mut dict = load(&temp.path().join("words.txt"));

    let out = run_script(&mut dict, "1\n12345\n1\n   \n4\n0\n");

    assert!(out.contains("only digits"));
    assert!(out.contains("non-empty word"));
    assert!(out.contains("words in order: []"));
    assert!(dict.is_empty());
}

#[test]
fn given_words_when_searching_prefix_then_matches_listed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.txt");
    fs::write(&path, "apple,apply,banana,").unwrap();
    let mut dict = load(&path);

    let out = run_script(&mut dict, "3\nAP\n3\nzzz\n0\n");

    assert!(out.contains("words with prefix 'ap': [apple, apply]"));
    assert!(out.contains("words with prefix 'zzz': []"));
}

#[test]
fn given_delete_when_running_then_store_rewritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("words.txt");
    fs::write(&path, "dog,cat,").unwrap();
    let mut dict = load(&path);

    let out = run_script(&mut dict, "2\ndog\n2\nbird\n0\n");

    assert!(out.contains("removed 'dog'"));
    assert!(out.contains("'bird' not found"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "cat,");
}

#[test]
fn given_invalid_option_when_running_then_menu_repeats() {
    let temp = TempDir::new().unwrap();
    let mut dict = load(&temp.path().join("words.txt"));

    let out = run_script(&mut dict, "9\nhello\n0\n");

    assert_eq!(out.matches("invalid option").count(), 2);
    assert!(out.matches("0 - exit").count() >= 3);
}

#[test]
fn given_end_of_input_when_running_then_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let mut dict = load(&temp.path().join("words.txt"));

    let out = run_script(&mut dict, "1\nkiwi\n");

    assert!(out.contains("inserted 'kiwi'"));
    assert!(out.contains("bye"));
    assert!(dict.contains("kiwi"));
}

#[test]
fn given_custom_prompt_when_running_then_prompt_used() {
    let temp = TempDir::new().unwrap();
    let mut dict = load(&temp.path().join("words.txt"));
    colored::control::set_override(false);
    let mut output = Vec::new();

    Shell::new(&mut dict, Cursor::new(&b"0\n"[..]), &mut output)
        .with_prompt(" >> ")
        .run()
        .unwrap();

    assert!(String::from_utf8(output).unwrap().contains("option >> "));
}
