use crate::enums::api_error::ApiError;
use crate::enums::repo_probe::RepoProbe;
use crate::structs::github::create_repo_request::CreateRepoRequest;
use crate::structs::github::github_status::GitHubStatus;
use crate::structs::github::repo_info::RepoInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubAction {
    /// Git button pressed: open the modal and probe the link state.
    Open,
    RepoInfoLoaded {
        probe: RepoProbe,
        result: Result<RepoInfo, ApiError>,
    },
    StatusLoaded(Result<GitHubStatus, ApiError>),
    SubmitCreateRepo(CreateRepoRequest),
    CreateRepoFinished(Result<(), ApiError>),
    SubmitPush {
        message: String,
        editor_content: Option<String>,
    },
    PushFinished(Result<(), ApiError>),
    RequestDisconnect,
    DisconnectConfirmed(bool),
    DisconnectFinished(Result<(), ApiError>),
    /// Close button, Escape or a click on the backdrop.
    Close,
}

impl GitHubAction {
    pub const fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::RepoInfoLoaded { .. }
                | Self::StatusLoaded(_)
                | Self::CreateRepoFinished(_)
                | Self::PushFinished(_)
                | Self::DisconnectFinished(_)
        )
    }
}
