use crate::config::output::{is_up_to_date, write_atomically};
use crate::config::ConfigError;
use std::fs;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

#[test]
fn test_write_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keybindings.gen.zsh");

    write_atomically(&path, "bindkey '^a' beginning-of-line\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "bindkey '^a' beginning-of-line\n");
}

#[test]
fn test_write_replaces_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keybindings.gen.zsh");
    fs::write(&path, "old content that is much longer than the new one\n").unwrap();

    write_atomically(&path, "new\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
}

#[test]
fn test_write_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("keybindings.gen.zsh");

    assert!(matches!(
        write_atomically(&path, "new\n"),
        Err(ConfigError::WriteFailed(_))
    ));
}

#[test]
fn test_missing_output_is_stale() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("keymap.yaml");
    fs::write(&input, "emacs: []\n").unwrap();

    assert!(!is_up_to_date(&input, &temp_dir.path().join("out.zsh")));
}

#[test]
fn test_newer_output_is_up_to_date() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("keymap.yaml");
    let output = temp_dir.path().join("out.zsh");
    fs::write(&input, "emacs: []\n").unwrap();
    fs::write(&output, "# generated\n").unwrap();

    let past = SystemTime::now() - Duration::from_secs(3600);
    fs::File::options()
        .write(true)
        .open(&input)
        .unwrap()
        .set_modified(past)
        .unwrap();

    assert!(is_up_to_date(&input, &output));
}

#[test]
fn test_older_output_is_stale() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("keymap.yaml");
    let output = temp_dir.path().join("out.zsh");
    fs::write(&input, "emacs: []\n").unwrap();
    fs::write(&output, "# generated\n").unwrap();

    let past = SystemTime::now() - Duration::from_secs(3600);
    fs::File::options()
        .write(true)
        .open(&output)
        .unwrap()
        .set_modified(past)
        .unwrap();

    assert!(!is_up_to_date(&input, &output));
}
