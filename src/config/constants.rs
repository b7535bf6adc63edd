use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "SPACES_BASE_URL";
pub const SESSION_COOKIE_ENV: &str = "SPACES_SESSION";
pub const SESSION_COOKIE_NAME: &str = "session";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_DIR_NAME: &str = ".spaces";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const INDEX_FILE: &str = "index.html";
pub const STYLES_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const DEFAULT_FILES: &[&str] = &[INDEX_FILE, STYLES_FILE, SCRIPT_FILE];

pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u64 = 3000;
pub const DEFAULT_PREVIEW_PORT: u16 = 8090;
pub const PREVIEW_PORT_RANGE_END: u16 = 8200;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const FADE_IN_THRESHOLD: f64 = 0.1;

pub const EDIT_PATH_SEGMENT: &str = "edit";
pub const PYTHON_PATH_SEGMENT: &str = "python";

pub const GITHUB_LOGIN_PATH: &str = "/api/github/login";
pub const SAVE_PYTHON_PATH: &str = "/api/save-python";
pub const SAVE_HTML_PATH: &str = "/api/save-html";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update from Spaces";
pub const CREATE_SITE_FAILED: &str = "Failed to create website";
pub const DISCONNECT_CONFIRM_PROMPT: &str =
    "Are you sure you want to disconnect this repository? This will not delete the repository from GitHub.";

pub fn millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
