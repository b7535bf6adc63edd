use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use async_trait::async_trait;
use mockall::mock;
use spaces_cli::enums::api_error::ApiError;
use spaces_cli::enums::notification_kind::NotificationKind;
use spaces_cli::errors::SpacesResult;
use spaces_cli::structs::config::editor_config::EditorConfig;
use spaces_cli::structs::github::create_repo_request::CreateRepoRequest;
use spaces_cli::structs::github::github_status::GitHubStatus;
use spaces_cli::structs::github::push_request::PushRequest;
use spaces_cli::structs::github::repo_info::RepoInfo;
use spaces_cli::structs::notification::Notification;
use spaces_cli::traits::clipboard_sink::ClipboardSink;
use spaces_cli::traits::confirmer::Confirmer;
use spaces_cli::traits::github_api::GitHubApi;
use spaces_cli::traits::notifier::Notifier;
use spaces_cli::traits::preview_sink::PreviewSink;
use spaces_cli::traits::sites_api::SitesApi;

mock! {
    pub Confirmer {}

    impl Confirmer for Confirmer {
        fn confirm(&self, prompt: &str) -> bool;
    }
}

pub fn editor_config() -> EditorConfig {
    EditorConfig {
        debounce_ms: 1000,
        ..EditorConfig::default()
    }
}

pub fn repo(name: &str) -> RepoInfo {
    RepoInfo {
        repo_name: name.to_string(),
        repo_url: format!("https://github.com/octo/{name}"),
    }
}

/// In-memory sites backend that records every call.
#[derive(Default)]
pub struct FakeSites {
    files: Mutex<HashMap<String, Result<String, ApiError>>>,
    save_error: Mutex<Option<ApiError>>,
    deploy_result: Mutex<Option<Result<String, ApiError>>>,
    pub fetches: Mutex<Vec<String>>,
    pub saves: Mutex<Vec<(String, String, String)>>,
    pub deploys: Mutex<Vec<String>>,
    pub creates: Mutex<Vec<String>>,
}

impl FakeSites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), Ok(content.to_string()));
        self
    }

    pub fn with_file_error(self, name: &str, error: ApiError) -> Self {
        self.files.lock().unwrap().insert(name.to_string(), Err(error));
        self
    }

    pub fn with_save_error(self, error: ApiError) -> Self {
        *self.save_error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_deploy_result(self, result: Result<String, ApiError>) -> Self {
        *self.deploy_result.lock().unwrap() = Some(result);
        self
    }

    pub fn saved(&self) -> Vec<(String, String, String)> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl SitesApi for FakeSites {
    async fn fetch_file(&self, _site_id: &str, filename: &str) -> Result<String, ApiError> {
        self.fetches.lock().unwrap().push(filename.to_string());
        self.files
            .lock()
            .unwrap()
            .get(filename)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::status(404, None)))
    }

    async fn save_file(&self, site_id: &str, filename: &str, content: &str) -> Result<(), ApiError> {
        self.saves
            .lock()
            .unwrap()
            .push((site_id.to_string(), filename.to_string(), content.to_string()));
        match self.save_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn deploy(&self, site_id: &str) -> Result<String, ApiError> {
        self.deploys.lock().unwrap().push(site_id.to_string());
        self.deploy_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(format!("https://{site_id}.spaces.example")))
    }

    async fn create_site(&self, name: &str) -> Result<String, ApiError> {
        self.creates.lock().unwrap().push(name.to_string());
        if name == "offline" {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        if name == "taken" {
            return Err(ApiError::status(409, Some("Site name already taken".to_string())));
        }
        Ok("42".to_string())
    }
}

/// In-memory GitHub backend. Repo-info answers are served in order; the
/// last one repeats.
pub struct FakeGitHub {
    repo_info: Mutex<VecDeque<Result<RepoInfo, ApiError>>>,
    status: Result<GitHubStatus, ApiError>,
    create_result: Result<(), ApiError>,
    push_result: Result<(), ApiError>,
    disconnect_result: Result<(), ApiError>,
    save_result: Result<(), ApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeGitHub {
    fn default() -> Self {
        Self {
            repo_info: Mutex::new(VecDeque::new()),
            status: Ok(GitHubStatus { connected: true }),
            create_result: Ok(()),
            push_result: Ok(()),
            disconnect_result: Ok(()),
            save_result: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo_info(self, result: Result<RepoInfo, ApiError>) -> Self {
        self.repo_info.lock().unwrap().push_back(result);
        self
    }

    pub fn with_status(mut self, result: Result<GitHubStatus, ApiError>) -> Self {
        self.status = result;
        self
    }

    pub fn with_push_result(mut self, result: Result<(), ApiError>) -> Self {
        self.push_result = result;
        self
    }

    pub fn with_save_result(mut self, result: Result<(), ApiError>) -> Self {
        self.save_result = result;
        self
    }

    pub fn with_disconnect_result(mut self, result: Result<(), ApiError>) -> Self {
        self.disconnect_result = result;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn status(&self) -> Result<GitHubStatus, ApiError> {
        self.record("status".to_string());
        self.status.clone()
    }

    async fn repo_info(&self, site_id: &str) -> Result<RepoInfo, ApiError> {
        self.record(format!("repo-info {site_id}"));
        let mut answers = self.repo_info.lock().unwrap();
        if answers.len() > 1 {
            answers.pop_front().unwrap()
        } else {
            answers
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ApiError::status(404, None)))
        }
    }

    async fn create_repo(&self, site_id: &str, request: &CreateRepoRequest) -> Result<(), ApiError> {
        self.record(format!("create-repo {site_id} {}", request.name));
        self.create_result.clone()
    }

    async fn push(&self, site_id: &str, request: &PushRequest) -> Result<(), ApiError> {
        self.record(format!("push {site_id} {}", request.message));
        self.push_result.clone()
    }

    async fn disconnect(&self, site_id: &str) -> Result<(), ApiError> {
        self.record(format!("disconnect {site_id}"));
        self.disconnect_result.clone()
    }

    async fn save_editor(&self, endpoint: &str, _content: &str) -> Result<(), ApiError> {
        self.record(format!("save {endpoint}"));
        self.save_result.clone()
    }

    fn login_url(&self) -> String {
        "http://spaces.test/api/github/login".to_string()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Success)
    }

    fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}

#[derive(Default)]
pub struct RecordingPreview {
    documents: Mutex<Vec<String>>,
}

impl RecordingPreview {
    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

impl PreviewSink for RecordingPreview {
    fn replace_document(&self, document: &str) -> SpacesResult<()> {
        self.documents.lock().unwrap().push(document.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&self, text: &str) -> SpacesResult<()> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
