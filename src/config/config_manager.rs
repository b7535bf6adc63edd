use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SpacesError, SpacesResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    /// Loads `~/.spaces/config.toml`, falling back to defaults when it is absent.
    pub fn load() -> SpacesResult<Config> {
        let mut config = Self::load_from(&Self::config_path())?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn load_from(path: &Path) -> SpacesResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SpacesError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply_env_overrides(config: &mut Config) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.server.base_url = base_url.trim().to_string();
            }
        }
    }

    pub fn create_sample_config() -> SpacesResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> SpacesResult<()> {
        let sample_config = r#"# Spaces CLI configuration

[server]
# Where the Spaces backend is running
base_url = "http://localhost:5000"

# Environment variable holding your `session` cookie from a logged-in browser
session_cookie_env = "SPACES_SESSION"

timeout_secs = 30

[editor]
files = ["index.html", "styles.css", "script.js"]
default_file = "index.html"

# Quiet period before the preview re-renders after an edit
debounce_ms = 1000

[preview]
port = 8090
open_browser = true

[notifications]
dismiss_after_ms = 3000
"#;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        println!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = &config.server.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("server.base_url must start with http:// or https://: {base_url}"));
        }

        if config.editor.files.is_empty() {
            errors.push("editor.files must list at least one file".to_string());
        }

        if !config.editor.files.contains(&config.editor.default_file) {
            errors.push(format!(
                "editor.default_file '{}' is not one of editor.files",
                config.editor.default_file
            ));
        }

        let mut names = std::collections::HashSet::new();
        for file in &config.editor.files {
            if !names.insert(file) {
                errors.push(format!("Duplicate editor file: {file}"));
            }
        }

        if config.editor.debounce_ms == 0 {
            errors.push("editor.debounce_ms must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
