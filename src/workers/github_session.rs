use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use crate::config::constants::{millis, DEFAULT_NOTIFICATION_DISMISS_MS};
use crate::enums::api_error::ApiError;
use crate::enums::github_action::GitHubAction;
use crate::enums::github_effect::GitHubEffect;
use crate::services::github_controller::GitHubController;
use crate::structs::github::pre_push_save::PrePushSave;
use crate::structs::github::push_request::PushRequest;
use crate::traits::confirmer::Confirmer;
use crate::traits::github_api::GitHubApi;
use crate::traits::notifier::Notifier;

/// Runs a [`GitHubController`] against the GitHub API, the user's confirmation
/// prompt and the notifier.
pub struct GitHubSession {
    controller: GitHubController,
    github: Arc<dyn GitHubApi>,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    sender: mpsc::UnboundedSender<GitHubAction>,
    receiver: mpsc::UnboundedReceiver<GitHubAction>,
    in_flight: usize,
    reloads: usize,
    dismiss_after: Duration,
}

impl GitHubSession {
    pub fn new(
        controller: GitHubController,
        github: Arc<dyn GitHubApi>,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            controller,
            github,
            notifier,
            confirmer,
            sender,
            receiver,
            in_flight: 0,
            reloads: 0,
            dismiss_after: millis(DEFAULT_NOTIFICATION_DISMISS_MS),
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub const fn controller(&self) -> &GitHubController {
        &self.controller
    }

    pub fn login_url(&self) -> String {
        self.github.login_url()
    }

    /// How many times the page state was thrown away and re-derived.
    pub const fn reloads(&self) -> usize {
        self.reloads
    }

    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: GitHubAction) {
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            if action.is_completion() {
                self.in_flight = self.in_flight.saturating_sub(1);
            }

            let result = self.controller.dispatch(action);
            for effect in result.effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.receiver.recv().await {
                Some(action) => self.dispatch(action),
                None => break,
            }
        }
    }

    /// Dispatches `action` and waits for everything it started.
    pub async fn run(&mut self, action: GitHubAction) {
        self.dispatch(action);
        self.settle().await;
    }

    /// Executes one effect. Synchronous effects may answer immediately with a follow-up action.
    fn run_effect(&mut self, effect: GitHubEffect) -> Option<GitHubAction> {
        match effect {
            GitHubEffect::FetchRepoInfo { site_id, probe } => {
                let github = Arc::clone(&self.github);
                self.spawn(async move {
                    let result = github.repo_info(&site_id).await;
                    GitHubAction::RepoInfoLoaded { probe, result }
                });
                None
            }
            GitHubEffect::FetchStatus => {
                let github = Arc::clone(&self.github);
                self.spawn(async move { GitHubAction::StatusLoaded(github.status().await) });
                None
            }
            GitHubEffect::CreateRepo { site_id, request } => {
                let github = Arc::clone(&self.github);
                self.spawn(async move {
                    GitHubAction::CreateRepoFinished(github.create_repo(&site_id, &request).await)
                });
                None
            }
            GitHubEffect::Push { site_id, request, pre_save } => {
                let github = Arc::clone(&self.github);
                self.spawn(async move {
                    GitHubAction::PushFinished(Self::push(github.as_ref(), &site_id, &request, pre_save).await)
                });
                None
            }
            GitHubEffect::ConfirmDisconnect { prompt } => {
                Some(GitHubAction::DisconnectConfirmed(self.confirmer.confirm(&prompt)))
            }
            GitHubEffect::Disconnect { site_id } => {
                let github = Arc::clone(&self.github);
                self.spawn(async move { GitHubAction::DisconnectFinished(github.disconnect(&site_id).await) });
                None
            }
            GitHubEffect::ReloadPage => {
                log::info!("🔄 Reloading GitHub state");
                self.reloads += 1;
                self.controller = GitHubController::new(self.controller.page_path())
                    .with_dismiss_after(self.dismiss_after);
                None
            }
            GitHubEffect::Notify(notification) => {
                self.notifier.notify(&notification);
                None
            }
        }
    }

    /// Saves the open editor, then pushes. A transport failure of the save
    /// aborts the push; an error status from it does not.
    async fn push(
        github: &dyn GitHubApi,
        site_id: &str,
        request: &PushRequest,
        pre_save: Option<PrePushSave>,
    ) -> Result<(), ApiError> {
        if let Some(save) = pre_save {
            match github.save_editor(save.endpoint(), &save.content).await {
                Ok(()) => log::debug!("💾 Editor saved through {}", save.endpoint()),
                Err(error @ ApiError::Status { .. }) => {
                    log::warn!("⚠️ Pre-push save to {} failed: {error}", save.endpoint());
                }
                Err(error) => return Err(error),
            }
        }
        github.push(site_id, request).await
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = GitHubAction> + Send + 'static,
    {
        self.in_flight += 1;
        let sender = self.sender.clone();
        tokio::spawn(async move {
            if sender.send(task.await).is_err() {
                log::debug!("📭 GitHub session closed before request completed");
            }
        });
    }
}
