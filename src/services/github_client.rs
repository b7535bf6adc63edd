use async_trait::async_trait;
use reqwest::Method;
use crate::config::constants::GITHUB_LOGIN_PATH;
use crate::enums::api_error::ApiError;
use crate::services::http_client::SpacesHttpClient;
use crate::structs::api::file_content::FileContent;
use crate::structs::github::create_repo_request::CreateRepoRequest;
use crate::structs::github::github_status::GitHubStatus;
use crate::structs::github::push_request::PushRequest;
use crate::structs::github::repo_info::RepoInfo;
use crate::traits::github_api::GitHubApi;

#[derive(Clone)]
pub struct GitHubClient {
    http: SpacesHttpClient,
}

impl GitHubClient {
    pub const fn new(http: SpacesHttpClient) -> Self {
        Self { http }
    }

    fn site_request(&self, method: Method, path: &str, site_id: &str) -> reqwest::RequestBuilder {
        self.http.request(method, path).query(&[("site_id", site_id)])
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn status(&self) -> Result<GitHubStatus, ApiError> {
        let request = self.http.request(Method::GET, "/api/github/status");
        self.http.send_for_json(request).await
    }

    async fn repo_info(&self, site_id: &str) -> Result<RepoInfo, ApiError> {
        let request = self.site_request(Method::GET, "/api/github/repo-info", site_id);
        self.http.send_for_json(request).await
    }

    async fn create_repo(&self, site_id: &str, request: &CreateRepoRequest) -> Result<(), ApiError> {
        let request = self
            .site_request(Method::POST, "/api/github/create-repo", site_id)
            .json(request);
        self.http.send(request).await?;
        Ok(())
    }

    async fn push(&self, site_id: &str, request: &PushRequest) -> Result<(), ApiError> {
        let request = self
            .site_request(Method::POST, "/api/github/push", site_id)
            .json(request);
        self.http.send(request).await?;
        Ok(())
    }

    async fn disconnect(&self, site_id: &str) -> Result<(), ApiError> {
        let request = self.site_request(Method::POST, "/api/github/disconnect-repo", site_id);
        self.http.send(request).await?;
        Ok(())
    }

    async fn save_editor(&self, endpoint: &str, content: &str) -> Result<(), ApiError> {
        let request = self.http.request(Method::POST, endpoint).json(&FileContent {
            content: content.to_string(),
        });
        self.http.send(request).await?;
        Ok(())
    }

    fn login_url(&self) -> String {
        self.http.url(GITHUB_LOGIN_PATH)
    }
}
