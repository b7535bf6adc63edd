use serde::{Deserialize, Serialize};

/// Body of the file endpoints, both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    #[serde(default)]
    pub content: String,
}
