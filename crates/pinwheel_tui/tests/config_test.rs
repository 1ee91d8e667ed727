//! Loading `GameConfig` from disk.

use pinwheel_tictactoe::Difficulty;
use pinwheel_tui::GameConfig;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
default_difficulty = "easy"
seed = 42
tick_rate_ms = 16
log_file = "game.log"
animations = false
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.default_difficulty(), Difficulty::Easy);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.tick_rate(), Duration::from_millis(16));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert!(!*config.animations());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file_requires_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_bad_difficulty_is_rejected() {
    let file = write_config("default_difficulty = \"impossible\"");
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let file = write_config("tick_rate_ms = 0");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_cli_overrides() {
    let config = GameConfig::default()
        .with_difficulty(Difficulty::Hard)
        .with_seed(7);
    assert_eq!(*config.default_difficulty(), Difficulty::Hard);
    assert_eq!(*config.seed(), Some(7));
}
