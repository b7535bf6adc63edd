use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PreviewConfig {
    #[serde(default = "ConfigHelper::default_preview_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_open_browser")]
    pub open_browser: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            port: ConfigHelper::default_preview_port(),
            open_browser: ConfigHelper::default_open_browser(),
        }
    }
}
