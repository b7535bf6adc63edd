use crate::enums::repo_probe::RepoProbe;
use crate::structs::github::create_repo_request::CreateRepoRequest;
use crate::structs::github::pre_push_save::PrePushSave;
use crate::structs::github::push_request::PushRequest;
use crate::structs::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubEffect {
    FetchRepoInfo {
        site_id: String,
        probe: RepoProbe,
    },
    FetchStatus,
    CreateRepo {
        site_id: String,
        request: CreateRepoRequest,
    },
    Push {
        site_id: String,
        request: PushRequest,
        pre_save: Option<PrePushSave>,
    },
    ConfirmDisconnect {
        prompt: String,
    },
    Disconnect {
        site_id: String,
    },
    /// Drop all local state and derive it again from the backend.
    ReloadPage,
    Notify(Notification),
}
