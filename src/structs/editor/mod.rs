pub mod deploy_modal;
pub mod editor_widget;
pub mod file_set;
pub mod file_tab;
pub mod preview_frame;
pub mod save_request;
