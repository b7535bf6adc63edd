use reqwest::Url;
use crate::config::constants::{EDIT_PATH_SEGMENT, PYTHON_PATH_SEGMENT};
use crate::errors::{SpacesError, SpacesResult};

pub struct UrlHelper;

impl UrlHelper {
    /// Site id taken from the segment after `edit`, or after `python` when
    /// there is no `edit` segment.
    ///
    /// The id is parsed from the page path instead of being passed around.
    /// `/edit/xyz/` yields `xyz`; a path with neither marker, or with nothing
    /// after it, is an error.
    pub fn site_id_from_path(path: &str) -> SpacesResult<String> {
        let segments: Vec<&str> = path.split('/').collect();

        [EDIT_PATH_SEGMENT, PYTHON_PATH_SEGMENT]
            .iter()
            .find_map(|marker| {
                segments
                    .iter()
                    .position(|segment| segment == marker)
                    .and_then(|index| segments.get(index + 1))
            })
            .filter(|id| !id.is_empty())
            .map(|id| (*id).to_string())
            .ok_or_else(|| SpacesError::missing_identifier("site ID", path))
    }

    pub fn editor_path(site_id: &str) -> String {
        format!("/{EDIT_PATH_SEGMENT}/{site_id}")
    }

    /// Accepts a bare path, a full page URL or a bare site id.
    pub fn normalize_page(input: &str) -> String {
        let trimmed = input.trim();
        if let Ok(url) = Url::parse(trimmed) {
            return url.path().to_string();
        }
        if trimmed.starts_with('/') {
            return trimmed.to_string();
        }
        Self::editor_path(trimmed)
    }

    pub fn join(base_url: &str, path: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
