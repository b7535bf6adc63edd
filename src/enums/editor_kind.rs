use crate::config::constants::{SAVE_HTML_PATH, SAVE_PYTHON_PATH};

/// Which editor page the user is on, decided by the page path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Web,
    Python,
}

impl EditorKind {
    pub fn from_path(path: &str) -> Self {
        if path.contains("/python/") {
            Self::Python
        } else {
            Self::Web
        }
    }

    /// Endpoint used to persist the open editor before a push.
    pub const fn save_endpoint(self) -> &'static str {
        match self {
            Self::Web => SAVE_HTML_PATH,
            Self::Python => SAVE_PYTHON_PATH,
        }
    }
}
