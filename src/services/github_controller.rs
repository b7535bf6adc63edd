use std::time::Duration;
use crate::config::constants::{millis, DEFAULT_NOTIFICATION_DISMISS_MS, DISCONNECT_CONFIRM_PROMPT};
use crate::enums::api_error::ApiError;
use crate::enums::editor_kind::EditorKind;
use crate::enums::github_action::GitHubAction;
use crate::enums::github_effect::GitHubEffect;
use crate::enums::github_panel::GitHubPanel;
use crate::enums::repo_link_state::RepoLinkState;
use crate::enums::repo_probe::RepoProbe;
use crate::errors::SpacesError;
use crate::helpers::url_helper::UrlHelper;
use crate::structs::dispatch_result::DispatchResult;
use crate::structs::github::create_repo_request::CreateRepoRequest;
use crate::structs::github::pre_push_save::PrePushSave;
use crate::structs::github::push_request::PushRequest;
use crate::structs::github::repo_info::RepoInfo;
use crate::structs::github::submit_guard::SubmitGuard;
use crate::structs::notification::Notification;

/// GitHub modal state machine.
///
/// Closed → Loading → (ConnectPrompt | RepoSetupForm | PushPanel). Create,
/// push and disconnect share one [`SubmitGuard`]; modal buttons stay disabled
/// exactly while it is held.
pub struct GitHubController {
    page_path: String,
    panel: GitHubPanel,
    guard: SubmitGuard,
    dismiss_after: Duration,
}

impl GitHubController {
    pub fn new(page_path: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
            panel: GitHubPanel::Closed,
            guard: SubmitGuard::default(),
            dismiss_after: millis(DEFAULT_NOTIFICATION_DISMISS_MS),
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    pub const fn panel(&self) -> &GitHubPanel {
        &self.panel
    }

    pub const fn is_submitting(&self) -> bool {
        self.guard.is_held()
    }

    pub const fn buttons_disabled(&self) -> bool {
        self.guard.is_held()
    }

    /// Link state as far as the modal has probed it.
    pub fn link_state(&self) -> Option<RepoLinkState> {
        match &self.panel {
            GitHubPanel::ConnectPrompt => Some(RepoLinkState::NotConnected),
            GitHubPanel::RepoSetupForm => Some(RepoLinkState::ConnectedNoRepo),
            GitHubPanel::PushPanel(info) => Some(RepoLinkState::ConnectedWithRepo(info.clone())),
            GitHubPanel::Closed | GitHubPanel::Loading => None,
        }
    }

    pub fn dispatch(&mut self, action: GitHubAction) -> DispatchResult<GitHubEffect> {
        match action {
            GitHubAction::Open => self.open(),
            GitHubAction::RepoInfoLoaded { probe, result } => self.repo_info_loaded(probe, result),
            GitHubAction::StatusLoaded(result) => {
                if !self.panel.is_open() {
                    return DispatchResult::unchanged();
                }
                match result {
                    Ok(status) => {
                        let state = if status.connected {
                            RepoLinkState::ConnectedNoRepo
                        } else {
                            RepoLinkState::NotConnected
                        };
                        self.panel = GitHubPanel::for_link_state(state);
                        DispatchResult::changed(Vec::new())
                    }
                    Err(error) => {
                        log::error!("❌ GitHub error: {error}");
                        self.panel = GitHubPanel::Closed;
                        DispatchResult::changed(vec![self.notify_error("Failed to check GitHub status")])
                    }
                }
            }
            GitHubAction::SubmitCreateRepo(request) => self.submit_create_repo(request),
            GitHubAction::CreateRepoFinished(result) => {
                self.guard.release();
                match result {
                    Ok(()) => {
                        log::info!("📦 Repository created");
                        let mut effects = vec![self.notify_success("Repository created successfully")];
                        match UrlHelper::site_id_from_path(&self.page_path) {
                            Ok(site_id) => effects.push(GitHubEffect::FetchRepoInfo {
                                site_id,
                                probe: RepoProbe::Refresh,
                            }),
                            Err(error) => effects.push(self.notify_error(&error.user_message())),
                        }
                        DispatchResult::changed(effects)
                    }
                    Err(error) => {
                        log::error!("❌ Create repository error: {error}");
                        let message = Self::failure_message(&error, "Failed to create repository");
                        DispatchResult::changed(vec![self.notify_error(&message)])
                    }
                }
            }
            GitHubAction::SubmitPush { message, editor_content } => self.submit_push(message, editor_content),
            GitHubAction::PushFinished(result) => {
                self.guard.release();
                match result {
                    Ok(()) => {
                        log::info!("⬆️  Changes pushed");
                        self.panel = GitHubPanel::Closed;
                        DispatchResult::changed(vec![self.notify_success("Changes pushed to GitHub! 🚀")])
                    }
                    Err(error) => {
                        log::error!("❌ Push error: {error}");
                        let message = Self::failure_message(&error, "Failed to push changes");
                        DispatchResult::changed(vec![self.notify_error(&message)])
                    }
                }
            }
            GitHubAction::RequestDisconnect => {
                if !matches!(self.panel, GitHubPanel::PushPanel(_)) {
                    return DispatchResult::unchanged();
                }
                DispatchResult {
                    effects: vec![GitHubEffect::ConfirmDisconnect {
                        prompt: DISCONNECT_CONFIRM_PROMPT.to_string(),
                    }],
                    state_changed: false,
                }
            }
            GitHubAction::DisconnectConfirmed(confirmed) => {
                if !confirmed || self.guard.is_held() {
                    return DispatchResult::unchanged();
                }
                let site_id = match UrlHelper::site_id_from_path(&self.page_path) {
                    Ok(site_id) => site_id,
                    Err(error) => return self.missing_site_id(&error),
                };
                self.guard.try_acquire();
                DispatchResult::changed(vec![GitHubEffect::Disconnect { site_id }])
            }
            GitHubAction::DisconnectFinished(result) => {
                self.guard.release();
                match result {
                    Ok(()) => {
                        log::info!("🔌 Repository disconnected");
                        self.panel = GitHubPanel::Closed;
                        DispatchResult::changed(vec![
                            self.notify_success("Repository disconnected"),
                            GitHubEffect::ReloadPage,
                        ])
                    }
                    Err(error) => {
                        log::error!("❌ Disconnect error: {error}");
                        let message = Self::failure_message(&error, "Failed to disconnect repository");
                        DispatchResult::changed(vec![self.notify_error(&message)])
                    }
                }
            }
            GitHubAction::Close => {
                if !self.panel.is_open() {
                    return DispatchResult::unchanged();
                }
                self.panel = GitHubPanel::Closed;
                DispatchResult::changed(Vec::new())
            }
        }
    }

    fn open(&mut self) -> DispatchResult<GitHubEffect> {
        self.panel = GitHubPanel::Loading;

        match UrlHelper::site_id_from_path(&self.page_path) {
            Ok(site_id) => DispatchResult::changed(vec![GitHubEffect::FetchRepoInfo {
                site_id,
                probe: RepoProbe::Entry,
            }]),
            Err(error) => {
                self.panel = GitHubPanel::Closed;
                self.missing_site_id(&error)
            }
        }
    }

    fn repo_info_loaded(
        &mut self,
        probe: RepoProbe,
        result: Result<RepoInfo, ApiError>,
    ) -> DispatchResult<GitHubEffect> {
        if !self.panel.is_open() {
            log::debug!("🗑️  Modal closed, ignoring repo info");
            return DispatchResult::unchanged();
        }

        match (probe, result) {
            (_, Ok(info)) => {
                self.panel = GitHubPanel::for_link_state(RepoLinkState::ConnectedWithRepo(info));
                DispatchResult::changed(Vec::new())
            }
            (RepoProbe::Entry, Err(ApiError::Status { .. })) => {
                DispatchResult::changed(vec![GitHubEffect::FetchStatus])
            }
            (RepoProbe::Entry, Err(error)) => {
                log::error!("❌ GitHub error: {error}");
                self.panel = GitHubPanel::Closed;
                DispatchResult::changed(vec![self.notify_error("Failed to check GitHub status")])
            }
            (RepoProbe::Refresh, Err(error)) if error.is_unauthorized() => {
                self.panel = GitHubPanel::ConnectPrompt;
                DispatchResult::changed(Vec::new())
            }
            (RepoProbe::Refresh, Err(error)) => {
                log::error!("❌ Failed to fetch repo info: {error}");
                DispatchResult::changed(vec![self.notify_error("Failed to load repository information")])
            }
        }
    }

    fn submit_create_repo(&mut self, request: CreateRepoRequest) -> DispatchResult<GitHubEffect> {
        if self.guard.is_held() {
            return DispatchResult::unchanged();
        }
        if request.name.trim().is_empty() {
            return DispatchResult::changed(vec![self.notify_error("Please enter a repository name")]);
        }
        let site_id = match UrlHelper::site_id_from_path(&self.page_path) {
            Ok(site_id) => site_id,
            Err(error) => return self.missing_site_id(&error),
        };

        self.guard.try_acquire();
        DispatchResult::changed(vec![GitHubEffect::CreateRepo { site_id, request }])
    }

    fn submit_push(&mut self, message: String, editor_content: Option<String>) -> DispatchResult<GitHubEffect> {
        if self.guard.is_held() {
            return DispatchResult::unchanged();
        }
        let site_id = match UrlHelper::site_id_from_path(&self.page_path) {
            Ok(site_id) => site_id,
            Err(error) => return self.missing_site_id(&error),
        };
        if message.trim().is_empty() {
            return DispatchResult::changed(vec![self.notify_error("Please enter a commit message")]);
        }

        let pre_save = editor_content.map(|content| PrePushSave {
            kind: EditorKind::from_path(&self.page_path),
            content,
        });

        self.guard.try_acquire();
        DispatchResult::changed(vec![GitHubEffect::Push {
            site_id,
            request: PushRequest { message },
            pre_save,
        }])
    }

    fn missing_site_id(&self, error: &SpacesError) -> DispatchResult<GitHubEffect> {
        log::error!("❌ {}", error.user_message());
        DispatchResult::changed(vec![self.notify_error("Could not determine site ID")])
    }

    fn failure_message(error: &ApiError, fallback: &str) -> String {
        error.server_message().unwrap_or(fallback).to_string()
    }

    fn notify_success(&self, message: &str) -> GitHubEffect {
        GitHubEffect::Notify(Notification::success(message).with_dismiss_after(self.dismiss_after))
    }

    fn notify_error(&self, message: &str) -> GitHubEffect {
        GitHubEffect::Notify(Notification::error(message).with_dismiss_after(self.dismiss_after))
    }
}
