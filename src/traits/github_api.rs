use async_trait::async_trait;
use crate::enums::api_error::ApiError;
use crate::structs::github::create_repo_request::CreateRepoRequest;
use crate::structs::github::github_status::GitHubStatus;
use crate::structs::github::push_request::PushRequest;
use crate::structs::github::repo_info::RepoInfo;

#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn status(&self) -> Result<GitHubStatus, ApiError>;

    async fn repo_info(&self, site_id: &str) -> Result<RepoInfo, ApiError>;

    async fn create_repo(&self, site_id: &str, request: &CreateRepoRequest) -> Result<(), ApiError>;

    async fn push(&self, site_id: &str, request: &PushRequest) -> Result<(), ApiError>;

    async fn disconnect(&self, site_id: &str) -> Result<(), ApiError>;

    /// Persists the open editor through `/api/save-html` or `/api/save-python`.
    async fn save_editor(&self, endpoint: &str, content: &str) -> Result<(), ApiError>;

    /// Absolute URL of the OAuth entry point.
    fn login_url(&self) -> String;
}
