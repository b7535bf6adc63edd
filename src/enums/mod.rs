pub mod api_error;
pub mod commands;
pub mod editor_action;
pub mod editor_effect;
pub mod editor_kind;
pub mod editor_mode;
pub mod github_action;
pub mod github_command;
pub mod github_effect;
pub mod github_panel;
pub mod notification_kind;
pub mod repo_link_state;
pub mod repo_probe;
pub mod request_slot;
