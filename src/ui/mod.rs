pub mod file_preview;
pub mod preview_server;
pub mod shared_preview;
pub mod system_clipboard;
pub mod terminal_confirmer;
