use std::collections::{HashMap, HashSet};
use std::time::Duration;
use crate::config::constants::{millis, DEFAULT_NOTIFICATION_DISMISS_MS};
use crate::enums::editor_action::EditorAction;
use crate::enums::editor_effect::EditorEffect;
use crate::enums::editor_mode::EditorMode;
use crate::enums::request_slot::RequestSlot;
use crate::services::preview_renderer::PreviewRenderer;
use crate::structs::config::editor_config::EditorConfig;
use crate::structs::dispatch_result::DispatchResult;
use crate::structs::editor::deploy_modal::DeployModal;
use crate::structs::editor::editor_widget::EditorWidget;
use crate::structs::editor::file_set::FileSet;
use crate::structs::editor::file_tab::FileTab;
use crate::structs::editor::preview_frame::PreviewFrame;
use crate::structs::editor::save_request::SaveRequest;
use crate::structs::notification::Notification;

/// State of the multi-file editor: buffers, active file, preview and deploy modal.
///
/// Pure: every operation is an [`EditorAction`] and every side effect comes
/// back as an [`EditorEffect`] for the session to execute.
pub struct EditorController {
    site_id: String,
    files: FileSet,
    current_file: String,
    default_file: String,
    widget: EditorWidget,
    preview: PreviewFrame,
    deploy_modal: Option<DeployModal>,
    debounce: Duration,
    dismiss_after: Duration,
    preview_generation: u64,
    next_token: u64,
    latest_tokens: HashMap<RequestSlot, u64>,
    pending_loads: HashSet<u64>,
}

impl EditorController {
    pub fn new(site_id: impl Into<String>, config: &EditorConfig) -> Self {
        let files = FileSet::new(config.files.iter().cloned());
        let current_file = config.default_file.clone();

        Self {
            site_id: site_id.into(),
            files,
            widget: EditorWidget::new(EditorMode::for_filename(&current_file)),
            default_file: current_file.clone(),
            current_file,
            preview: PreviewFrame::default(),
            deploy_modal: None,
            debounce: millis(config.debounce_ms),
            dismiss_after: millis(DEFAULT_NOTIFICATION_DISMISS_MS),
            preview_generation: 0,
            next_token: 0,
            latest_tokens: HashMap::new(),
            pending_loads: HashSet::new(),
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub const fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn current_file(&self) -> &str {
        &self.current_file
    }

    pub const fn widget(&self) -> &EditorWidget {
        &self.widget
    }

    pub const fn preview(&self) -> &PreviewFrame {
        &self.preview
    }

    pub const fn deploy_modal(&self) -> Option<&DeployModal> {
        self.deploy_modal.as_ref()
    }

    pub const fn preview_generation(&self) -> u64 {
        self.preview_generation
    }

    /// File tabs in order; exactly the current file is active.
    pub fn tabs(&self) -> Vec<FileTab> {
        self.files
            .names()
            .iter()
            .map(|name| FileTab {
                filename: name.clone(),
                active: *name == self.current_file,
            })
            .collect()
    }

    pub fn dispatch(&mut self, action: EditorAction) -> DispatchResult<EditorEffect> {
        match action {
            EditorAction::LoadAll => self.load_all(),
            EditorAction::FileLoaded { filename, token, result } => {
                let batch_done = self.pending_loads.remove(&token) && self.pending_loads.is_empty();
                let mut effects = Vec::new();

                match result {
                    Ok(_) if self.is_stale(&RequestSlot::Load(filename.clone()), token) => {
                        log::debug!("🗑️  Discarding stale load of {filename} (token {token})");
                    }
                    Ok(content) => self.apply_loaded(&filename, content),
                    // Reported even when superseded; only the content is dropped.
                    Err(error) => {
                        log::error!("❌ Error loading {filename}: {error}");
                        effects.push(self.notify_error(format!("Error loading {filename}")));
                    }
                }

                if batch_done {
                    self.switch_file(self.default_file.clone());
                    effects.push(self.render_preview());
                }
                DispatchResult::changed(effects)
            }
            EditorAction::SwitchFile(target) => {
                self.switch_file(target);
                DispatchResult::changed(Vec::new())
            }
            EditorAction::Edit(content) => {
                self.widget.edit(content);
                self.preview_generation += 1;
                DispatchResult::changed(vec![EditorEffect::SchedulePreview {
                    generation: self.preview_generation,
                    delay: self.debounce,
                }])
            }
            EditorAction::PreviewTimerFired { generation } => {
                if generation != self.preview_generation {
                    log::debug!("⏱️  Skipping superseded preview timer {generation}");
                    return DispatchResult::unchanged();
                }
                self.flush();
                DispatchResult::changed(vec![self.render_preview()])
            }
            EditorAction::UpdatePreview => DispatchResult::changed(vec![self.render_preview()]),
            EditorAction::Save => {
                let save = self.prepare_save();
                DispatchResult::changed(vec![EditorEffect::SaveFile(save)])
            }
            EditorAction::SaveFinished { filename, token, result } => {
                if self.is_stale(&RequestSlot::Save(filename.clone()), token) {
                    log::debug!("🗑️  Discarding stale save response for {filename} (token {token})");
                    return DispatchResult::unchanged();
                }
                let notification = match result {
                    Ok(()) => {
                        log::info!("💾 {filename} saved");
                        Notification::success(format!("{filename} saved successfully"))
                            .with_dismiss_after(self.dismiss_after)
                    }
                    Err(error) => {
                        log::error!("❌ Error saving {filename}: {error}");
                        Notification::error(format!("Error saving {filename}"))
                            .with_dismiss_after(self.dismiss_after)
                    }
                };
                DispatchResult::changed(vec![EditorEffect::Notify(notification)])
            }
            EditorAction::Deploy => {
                let save = self.prepare_save();
                let token = self.issue_token(RequestSlot::Deploy);
                DispatchResult::changed(vec![EditorEffect::Deploy { save, token }])
            }
            EditorAction::DeployFinished { token, result } => {
                if self.is_stale(&RequestSlot::Deploy, token) {
                    log::debug!("🗑️  Discarding stale deploy response (token {token})");
                    return DispatchResult::unchanged();
                }
                match result {
                    Ok(url) => {
                        log::info!("🚀 Site deployed to {url}");
                        self.deploy_modal = Some(DeployModal { url: url.clone() });
                        DispatchResult::changed(vec![EditorEffect::ShowDeployModal(url)])
                    }
                    Err(error) => {
                        log::error!("❌ Error deploying site: {error}");
                        DispatchResult::changed(vec![self.notify_error("Error deploying site".to_string())])
                    }
                }
            }
            EditorAction::CopyDeployUrl => match &self.deploy_modal {
                Some(modal) => DispatchResult {
                    effects: vec![EditorEffect::CopyToClipboard(modal.url.clone())],
                    state_changed: false,
                },
                None => DispatchResult::unchanged(),
            },
            EditorAction::CloseDeployModal => {
                if self.deploy_modal.take().is_some() {
                    DispatchResult::changed(Vec::new())
                } else {
                    DispatchResult::unchanged()
                }
            }
        }
    }

    fn load_all(&mut self) -> DispatchResult<EditorEffect> {
        let names: Vec<String> = self.files.names().to_vec();
        self.pending_loads.clear();

        let mut effects = Vec::with_capacity(names.len());
        for filename in names {
            let token = self.issue_token(RequestSlot::Load(filename.clone()));
            self.pending_loads.insert(token);
            effects.push(EditorEffect::LoadFile {
                site_id: self.site_id.clone(),
                filename,
                token,
            });
        }

        DispatchResult::changed(effects)
    }

    fn apply_loaded(&mut self, filename: &str, content: String) {
        if filename == self.current_file && !self.widget.dirty {
            self.widget.bind(content.clone(), EditorMode::for_filename(filename));
        }
        self.files.set(filename, content);
    }

    fn switch_file(&mut self, target: String) {
        self.flush();

        let mode = EditorMode::for_filename(&target);
        if mode == EditorMode::Default {
            log::warn!("⚠️ No syntax mode for {target}, editing as plain text");
        }
        log::debug!("📝 Switching to {target} ({})", mode.name());

        self.files.track(&target);
        let content = self.files.content_or_empty(&target).to_string();
        self.current_file = target;
        self.widget.bind(content, mode);
    }

    /// Writes the widget buffer back into the file set.
    ///
    /// A dirty buffer supersedes any load of the same file still in flight.
    fn flush(&mut self) {
        if self.widget.dirty {
            self.issue_token(RequestSlot::Load(self.current_file.clone()));
        }
        self.files.set(&self.current_file, self.widget.value.clone());
    }

    fn prepare_save(&mut self) -> SaveRequest {
        self.flush();
        let filename = self.current_file.clone();
        let token = self.issue_token(RequestSlot::Save(filename.clone()));

        SaveRequest {
            site_id: self.site_id.clone(),
            content: self.widget.value.clone(),
            filename,
            token,
        }
    }

    fn render_preview(&mut self) -> EditorEffect {
        let document = PreviewRenderer::render(&self.files);
        self.preview.replace(document.clone());
        EditorEffect::PreviewReplaced(document)
    }

    fn issue_token(&mut self, slot: RequestSlot) -> u64 {
        self.next_token += 1;
        self.latest_tokens.insert(slot, self.next_token);
        self.next_token
    }

    fn is_stale(&self, slot: &RequestSlot, token: u64) -> bool {
        self.latest_tokens.get(slot).is_some_and(|latest| *latest != token)
    }

    fn notify_error(&self, message: String) -> EditorEffect {
        EditorEffect::Notify(Notification::error(message).with_dismiss_after(self.dismiss_after))
    }
}
