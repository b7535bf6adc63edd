use serde::{Deserialize, Serialize};
use crate::structs::config::editor_config::EditorConfig;
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::config::preview_config::PreviewConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}
