use indoc::indoc;
use std::fs;
use tempfile::TempDir;

use super::*;

fn setup() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml").to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn writes_defaults_when_file_is_missing() {
    let (_dir, path) = setup();

    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    assert_eq!(manager.get(), Config::default());
    let written: Config =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn reads_existing_file() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        indoc! {"
            theme: Emerald
            titles:
              - One
              - Two
            padding_left: 2
            padding_right: 3
            settle_fraction: 0.5
            tick: 30ms
            position_policy: Strict
        "},
    )
    .unwrap();

    let config = ConfigManager::builder().path(path).build().unwrap().get();

    assert_eq!(config.theme, "Emerald");
    assert_eq!(config.titles, vec!["One".to_string(), "Two".to_string()]);
    assert_eq!(config.padding_left, 2);
    assert_eq!(config.padding_right, 3);
    assert_eq!(config.settle_fraction, 0.5);
    assert_eq!(config.tick_duration().unwrap(), Duration::from_millis(30));
    assert_eq!(config.position_policy, PositionPolicy::Strict);
}

#[test]
fn missing_keys_use_defaults() {
    let (_dir, path) = setup();
    fs::write(&path, "theme: Red\n").unwrap();

    let config = ConfigManager::builder().path(path).build().unwrap().get();

    assert_eq!(config.theme, "Red");
    assert_eq!(config.titles, get_default_titles());
    assert_eq!(config.tick, DEFAULT_TICK_STR);
}

#[test]
fn falls_back_to_defaults_on_parse_error() {
    let (_dir, path) = setup();
    fs::write(&path, "titles: [unterminated\n").unwrap();

    let config = ConfigManager::builder().path(path).build().unwrap().get();

    assert_eq!(config, Config::default());
}

#[test]
fn update_persists_config() {
    let (_dir, path) = setup();
    let mut manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    let config = Config {
        theme: "Indigo".to_string(),
        ..manager.get()
    };
    manager.update(config.clone()).unwrap();

    let reloaded = ConfigManager::builder().path(path).build().unwrap().get();
    assert_eq!(reloaded, config);
}

#[test]
fn rejects_invalid_tick() {
    let config = Config {
        tick: "soon".to_string(),
        ..Config::default()
    };
    assert!(config.tick_duration().is_err());
}
