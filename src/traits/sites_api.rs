use async_trait::async_trait;
use crate::enums::api_error::ApiError;

/// The sites REST API: per-file content, deploys and site creation.
#[async_trait]
pub trait SitesApi: Send + Sync {
    async fn fetch_file(&self, site_id: &str, filename: &str) -> Result<String, ApiError>;

    async fn save_file(&self, site_id: &str, filename: &str, content: &str) -> Result<(), ApiError>;

    /// Returns the public URL of the deployed site.
    async fn deploy(&self, site_id: &str) -> Result<String, ApiError>;

    /// Returns the id of the new site.
    async fn create_site(&self, name: &str) -> Result<String, ApiError>;
}
