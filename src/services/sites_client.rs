use async_trait::async_trait;
use reqwest::Method;
use crate::enums::api_error::ApiError;
use crate::services::http_client::SpacesHttpClient;
use crate::structs::api::create_site_request::CreateSiteRequest;
use crate::structs::api::create_site_response::CreateSiteResponse;
use crate::structs::api::deploy_response::DeployResponse;
use crate::structs::api::file_content::FileContent;
use crate::traits::sites_api::SitesApi;

#[derive(Clone)]
pub struct SitesClient {
    http: SpacesHttpClient,
}

impl SitesClient {
    pub const fn new(http: SpacesHttpClient) -> Self {
        Self { http }
    }

    fn file_path(site_id: &str, filename: &str) -> String {
        format!("/api/sites/{site_id}/files/{filename}")
    }
}

#[async_trait]
impl SitesApi for SitesClient {
    async fn fetch_file(&self, site_id: &str, filename: &str) -> Result<String, ApiError> {
        let request = self.http.request(Method::GET, &Self::file_path(site_id, filename));
        let body: FileContent = self.http.send_for_json(request).await?;
        Ok(body.content)
    }

    async fn save_file(&self, site_id: &str, filename: &str, content: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .request(Method::PUT, &Self::file_path(site_id, filename))
            .json(&FileContent {
                content: content.to_string(),
            });
        self.http.send(request).await?;
        Ok(())
    }

    async fn deploy(&self, site_id: &str) -> Result<String, ApiError> {
        let request = self.http.request(Method::POST, &format!("/api/sites/{site_id}/deploy"));
        let body: DeployResponse = self.http.send_for_json(request).await?;
        Ok(body.url)
    }

    async fn create_site(&self, name: &str) -> Result<String, ApiError> {
        let request = self.http.request(Method::POST, "/api/sites").json(&CreateSiteRequest {
            name: name.to_string(),
        });
        let body: CreateSiteResponse = self.http.send_for_json(request).await?;
        Ok(body.site_id())
    }
}
