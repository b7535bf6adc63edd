use std::time::Duration;
use crate::structs::editor::save_request::SaveRequest;
use crate::structs::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect {
    LoadFile {
        site_id: String,
        filename: String,
        token: u64,
    },
    SaveFile(SaveRequest),
    /// Save first, then deploy. Both completions are reported.
    Deploy {
        save: SaveRequest,
        token: u64,
    },
    SchedulePreview {
        generation: u64,
        delay: Duration,
    },
    PreviewReplaced(String),
    ShowDeployModal(String),
    CopyToClipboard(String),
    Notify(Notification),
}
