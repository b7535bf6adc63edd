pub mod config_helper;
pub mod debouncer;
pub mod url_helper;
