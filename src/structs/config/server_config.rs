use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the backend session cookie.
    #[serde(default = "ConfigHelper::default_session_cookie_env")]
    pub session_cookie_env: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    pub fn session_cookie(&self) -> Option<String> {
        std::env::var(&self.session_cookie_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            session_cookie_env: ConfigHelper::default_session_cookie_env(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
