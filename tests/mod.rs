mod common;

mod config_manager_tests;
mod http_client_tests;
mod preview_tests;
