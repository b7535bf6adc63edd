use crate::enums::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Fetch every known file from the backend.
    LoadAll,
    FileLoaded {
        filename: String,
        token: u64,
        result: Result<String, ApiError>,
    },
    /// File tab selected.
    SwitchFile(String),
    /// Editor change event carrying the full buffer.
    Edit(String),
    PreviewTimerFired {
        generation: u64,
    },
    UpdatePreview,
    Save,
    SaveFinished {
        filename: String,
        token: u64,
        result: Result<(), ApiError>,
    },
    Deploy,
    DeployFinished {
        token: u64,
        result: Result<String, ApiError>,
    },
    CopyDeployUrl,
    CloseDeployModal,
}

impl EditorAction {
    /// True for actions that report the end of a network effect.
    pub const fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::FileLoaded { .. } | Self::SaveFinished { .. } | Self::DeployFinished { .. }
        )
    }
}
