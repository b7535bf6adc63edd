use crate::enums::repo_link_state::RepoLinkState;
use crate::structs::github::repo_info::RepoInfo;

/// Panel shown in the GitHub modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubPanel {
    Closed,
    Loading,
    ConnectPrompt,
    RepoSetupForm,
    PushPanel(RepoInfo),
}

impl GitHubPanel {
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn for_link_state(state: RepoLinkState) -> Self {
        match state {
            RepoLinkState::NotConnected => Self::ConnectPrompt,
            RepoLinkState::ConnectedNoRepo => Self::RepoSetupForm,
            RepoLinkState::ConnectedWithRepo(info) => Self::PushPanel(info),
        }
    }
}
