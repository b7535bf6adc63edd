pub mod clipboard_sink;
pub mod confirmer;
pub mod github_api;
pub mod notifier;
pub mod preview_sink;
pub mod sites_api;
