use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSiteResponse {
    /// The backend sends a numeric id; older deployments send a string.
    pub site_id: Value,
}

impl CreateSiteResponse {
    pub fn site_id(&self) -> String {
        match &self.site_id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}
