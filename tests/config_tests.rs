use expense_tracker::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());

    let cfg = manager.load().expect("load config");

    assert_eq!(cfg, Config::default());
    assert!(!cfg.plain_output);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested"));

    let cfg = Config {
        plain_output: true,
        high_contrast: true,
    };
    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(manager.path().ends_with("config.json"));
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());
    std::fs::write(manager.path(), r#"{ "high_contrast": true }"#).expect("write config");

    let loaded = manager.load().expect("load config");

    assert!(loaded.high_contrast);
    assert!(!loaded.plain_output);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());
    std::fs::write(manager.path(), "not json").expect("write config");

    assert!(manager.load().is_err());
}
