use crate::config::constants::CREATE_SITE_FAILED;
use crate::errors::{SpacesError, SpacesResult};
use crate::helpers::url_helper::UrlHelper;
use crate::traits::sites_api::SitesApi;

pub struct SiteCreator;

impl SiteCreator {
    /// Creates a site and returns the editor path to open next.
    pub async fn create(sites: &dyn SitesApi, name: &str) -> SpacesResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpacesError::validation_error("name", "Please enter a site name"));
        }

        match sites.create_site(name).await {
            Ok(site_id) => {
                log::info!("🆕 Created site '{name}' ({site_id})");
                Ok(UrlHelper::editor_path(&site_id))
            }
            Err(error) => {
                log::error!("❌ Error creating site: {error}");
                Err(SpacesError::request_failed("create site", CREATE_SITE_FAILED, &error))
            }
        }
    }
}
