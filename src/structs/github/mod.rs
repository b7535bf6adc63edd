pub mod create_repo_request;
pub mod github_status;
pub mod pre_push_save;
pub mod push_request;
pub mod repo_info;
pub mod submit_guard;
