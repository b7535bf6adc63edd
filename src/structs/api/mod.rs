pub mod create_site_request;
pub mod create_site_response;
pub mod deploy_response;
pub mod error_body;
pub mod file_content;
