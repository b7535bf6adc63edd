use crate::structs::github::repo_info::RepoInfo;

/// Whether the current site has a linked GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLinkState {
    NotConnected,
    ConnectedNoRepo,
    ConnectedWithRepo(RepoInfo),
}
