pub mod command_runner;
pub mod editor_session;
pub mod github_session;
pub mod site_watcher;
