pub mod editor_controller;
pub mod github_client;
pub mod github_controller;
pub mod http_client;
pub mod preview_renderer;
pub mod site_creator;
pub mod sites_client;
