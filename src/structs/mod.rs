pub mod api;
pub mod cli;
pub mod config;
pub mod dispatch_result;
pub mod editor;
pub mod github;
pub mod notification;
pub mod page;
