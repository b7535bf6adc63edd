use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "ConfigHelper::default_files")]
    pub files: Vec<String>,

    #[serde(default = "ConfigHelper::default_file")]
    pub default_file: String,

    #[serde(default = "ConfigHelper::default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            files: ConfigHelper::default_files(),
            default_file: ConfigHelper::default_file(),
            debounce_ms: ConfigHelper::default_debounce_ms(),
        }
    }
}
