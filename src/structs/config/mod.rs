pub mod config;
pub mod editor_config;
pub mod notification_config;
pub mod preview_config;
pub mod server_config;
