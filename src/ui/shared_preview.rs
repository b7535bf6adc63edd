use std::sync::{Arc, RwLock};
use crate::errors::{SpacesError, SpacesResult};
use crate::traits::preview_sink::PreviewSink;

#[derive(Debug, Clone, Default)]
struct PreviewState {
    revision: u64,
    document: String,
}

/// Preview document shared with the local preview server.
#[derive(Debug, Clone, Default)]
pub struct SharedPreview {
    state: Arc<RwLock<PreviewState>>,
}

impl SharedPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> String {
        self.state
            .read()
            .map(|state| state.document.clone())
            .unwrap_or_default()
    }

    /// Bumped on every replacement so the wrapper page can reload the frame.
    pub fn revision(&self) -> u64 {
        self.state.read().map(|state| state.revision).unwrap_or_default()
    }
}

impl PreviewSink for SharedPreview {
    fn replace_document(&self, document: &str) -> SpacesResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| SpacesError::system_error("preview update", &e.to_string()))?;
        state.document = document.to_string();
        state.revision += 1;
        Ok(())
    }
}
