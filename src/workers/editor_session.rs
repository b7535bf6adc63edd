use std::sync::Arc;
use tokio::sync::mpsc;
use crate::enums::editor_action::EditorAction;
use crate::enums::editor_effect::EditorEffect;
use crate::helpers::debouncer::Debouncer;
use crate::services::editor_controller::EditorController;
use crate::structs::editor::save_request::SaveRequest;
use crate::structs::notification::Notification;
use crate::traits::clipboard_sink::ClipboardSink;
use crate::traits::notifier::Notifier;
use crate::traits::preview_sink::PreviewSink;
use crate::traits::sites_api::SitesApi;

/// Runs an [`EditorController`] against real collaborators.
///
/// Network effects are spawned and report back on the session channel, so
/// loads, saves and deploys overlap freely. Stale responses are filtered by
/// the controller, not here.
pub struct EditorSession {
    controller: EditorController,
    sites: Arc<dyn SitesApi>,
    notifier: Arc<dyn Notifier>,
    preview: Arc<dyn PreviewSink>,
    clipboard: Arc<dyn ClipboardSink>,
    sender: mpsc::UnboundedSender<EditorAction>,
    receiver: mpsc::UnboundedReceiver<EditorAction>,
    debouncer: Debouncer<EditorAction>,
    in_flight: usize,
}

impl EditorSession {
    pub fn new(
        controller: EditorController,
        sites: Arc<dyn SitesApi>,
        notifier: Arc<dyn Notifier>,
        preview: Arc<dyn PreviewSink>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(sender.clone());

        Self {
            controller,
            sites,
            notifier,
            preview,
            clipboard,
            sender,
            receiver,
            debouncer,
            in_flight: 0,
        }
    }

    pub const fn controller(&self) -> &EditorController {
        &self.controller
    }

    /// Handle for feeding actions from outside, e.g. a file watcher.
    pub fn sender(&self) -> mpsc::UnboundedSender<EditorAction> {
        self.sender.clone()
    }

    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn has_pending_preview(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn dispatch(&mut self, action: EditorAction) {
        if action.is_completion() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        let result = self.controller.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
    }

    /// Waits for the next queued action and dispatches it. Returns false once
    /// the channel is closed.
    pub async fn step(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Processes completions until no network effect is outstanding.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            if !self.step().await {
                break;
            }
        }
    }

    /// Like [`settle`](Self::settle), then also waits out a pending debounced preview.
    pub async fn settle_with_preview(&mut self) {
        self.settle().await;
        while self.debouncer.is_pending() || !self.receiver.is_empty() {
            if !self.step().await {
                break;
            }
            self.settle().await;
        }
    }

    fn run_effect(&mut self, effect: EditorEffect) {
        match effect {
            EditorEffect::LoadFile { site_id, filename, token } => {
                let sites = Arc::clone(&self.sites);
                self.spawn(1, async move {
                    let result = sites.fetch_file(&site_id, &filename).await;
                    vec![EditorAction::FileLoaded { filename, token, result }]
                });
            }
            EditorEffect::SaveFile(save) => {
                let sites = Arc::clone(&self.sites);
                self.spawn(1, async move { vec![Self::save(sites.as_ref(), save).await] });
            }
            EditorEffect::Deploy { save, token } => {
                let sites = Arc::clone(&self.sites);
                let sender = self.sender.clone();
                self.spawn(2, async move {
                    let site_id = save.site_id.clone();
                    let saved = Self::save(sites.as_ref(), save).await;
                    if sender.send(saved).is_err() {
                        log::debug!("📭 Editor session closed before save completed");
                    }
                    let result = sites.deploy(&site_id).await;
                    vec![EditorAction::DeployFinished { token, result }]
                });
            }
            EditorEffect::SchedulePreview { generation, delay } => {
                self.debouncer
                    .schedule(delay, EditorAction::PreviewTimerFired { generation });
            }
            EditorEffect::PreviewReplaced(document) => {
                if let Err(e) = self.preview.replace_document(&document) {
                    log::error!("❌ Failed to update preview: {e}");
                }
            }
            EditorEffect::ShowDeployModal(url) => {
                self.notifier.notify(&Notification::success(format!(
                    "Site Deployed Successfully! Your site is now live at: {url}"
                )));
            }
            EditorEffect::CopyToClipboard(text) => match self.clipboard.copy_text(&text) {
                Ok(()) => self.notifier.notify(&Notification::info("Copied to clipboard")),
                Err(e) => {
                    log::error!("❌ {e}");
                    self.notifier.notify(&Notification::error("Could not copy to clipboard"));
                }
            },
            EditorEffect::Notify(notification) => self.notifier.notify(&notification),
        }
    }

    async fn save(sites: &dyn SitesApi, save: SaveRequest) -> EditorAction {
        let result = sites.save_file(&save.site_id, &save.filename, &save.content).await;
        EditorAction::SaveFinished {
            filename: save.filename,
            token: save.token,
            result,
        }
    }

    /// Spawns `task`, which reports `completions` actions in total: the ones
    /// it returns plus any it sends on the channel itself.
    fn spawn<F>(&mut self, completions: usize, task: F)
    where
        F: std::future::Future<Output = Vec<EditorAction>> + Send + 'static,
    {
        self.in_flight += completions;
        let sender = self.sender.clone();
        tokio::spawn(async move {
            for action in task.await {
                if sender.send(action).is_err() {
                    log::debug!("📭 Editor session closed before request completed");
                }
            }
        });
    }
}
