use std::fs;
use tempfile::TempDir;
use spaces_cli::config::config_manager::ConfigManager;
use spaces_cli::config::constants::BASE_URL_ENV;
use spaces_cli::errors::SpacesError;
use spaces_cli::structs::config::config::Config;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();

    let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.server.base_url, "http://localhost:5000");
    assert_eq!(config.editor.files, vec!["index.html", "styles.css", "script.js"]);
    assert_eq!(config.editor.default_file, "index.html");
    assert_eq!(config.editor.debounce_ms, 1000);
    assert_eq!(config.notifications.dismiss_after_ms, 3000);
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
base_url = "https://spaces.example.com"

[editor]
debounce_ms = 250
"#,
    );

    let config = ConfigManager::load_from(&path).unwrap();

    assert_eq!(config.server.base_url, "https://spaces.example.com");
    assert_eq!(config.server.session_cookie_env, "SPACES_SESSION");
    assert_eq!(config.editor.debounce_ms, 250);
    assert_eq!(config.editor.default_file, "index.html");
    assert_eq!(config.preview.port, 8090);
}

#[test]
fn sample_config_round_trips_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigManager::write_sample_config(&path).unwrap();
    let config = ConfigManager::load_from(&path).unwrap();

    assert!(ConfigManager::validate_config(&config).is_ok());
    assert_eq!(config.server.timeout_secs, 30);
    assert!(config.preview.open_browser);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server\nbase_url = 1");

    let error = ConfigManager::load_from(&path).unwrap_err();

    assert!(matches!(error, SpacesError::ParseError { .. }), "{error:?}");
}

#[test]
fn validation_collects_every_problem() {
    let mut config = Config::default();
    config.server.base_url = "localhost:5000".to_string();
    config.editor.files = vec!["index.html".to_string(), "index.html".to_string()];
    config.editor.default_file = "main.py".to_string();
    config.editor.debounce_ms = 0;

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors.len(), 4, "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("base_url")));
    assert!(errors.iter().any(|e| e.contains("default_file")));
    assert!(errors.iter().any(|e| e.contains("Duplicate")));
    assert!(errors.iter().any(|e| e.contains("debounce_ms")));
}

#[test]
fn empty_file_list_is_rejected() {
    let mut config = Config::default();
    config.editor.files.clear();

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert!(errors.iter().any(|e| e.contains("at least one file")));
}

#[test]
fn environment_overrides_the_base_url() {
    let mut config = Config::default();

    std::env::set_var(BASE_URL_ENV, "https://staging.spaces.example");
    ConfigManager::apply_env_overrides(&mut config);
    std::env::remove_var(BASE_URL_ENV);

    assert_eq!(config.server.base_url, "https://staging.spaces.example");
}
