use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_FILES, DEFAULT_NOTIFICATION_DISMISS_MS,
    DEFAULT_PREVIEW_PORT, DEFAULT_TIMEOUT_SECS, INDEX_FILE, SESSION_COOKIE_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_session_cookie_env() -> String {
        SESSION_COOKIE_ENV.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_files() -> Vec<String> {
        DEFAULT_FILES.iter().map(|f| (*f).to_string()).collect()
    }

    pub fn default_file() -> String {
        INDEX_FILE.to_string()
    }

    pub fn default_debounce_ms() -> u64 {
        DEFAULT_DEBOUNCE_MS
    }

    pub fn default_preview_port() -> u16 {
        DEFAULT_PREVIEW_PORT
    }

    pub fn default_open_browser() -> bool {
        true
    }

    pub fn default_dismiss_after_ms() -> u64 {
        DEFAULT_NOTIFICATION_DISMISS_MS
    }
}
