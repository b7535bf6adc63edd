use std::collections::HashMap;
use std::fs;
use std::path::Path;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use crate::enums::editor_action::EditorAction;
use crate::errors::{SpacesError, SpacesResult};

/// Turns saves of the local site files into editor actions.
///
/// A changed file becomes `SwitchFile` + `Edit`, followed by `Save` when
/// autosave is on. Events that leave the content unchanged are dropped.
pub struct SiteWatcher {
    _watcher: RecommendedWatcher,
}

impl SiteWatcher {
    pub fn start(
        dir: &Path,
        files: Vec<String>,
        sender: mpsc::UnboundedSender<EditorAction>,
        autosave: bool,
    ) -> SpacesResult<Self> {
        let mut last_seen: HashMap<String, String> = HashMap::new();

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let event = match result {
                Ok(event) => event,
                Err(e) => {
                    log::error!("❌ Watch error: {e}");
                    return;
                }
            };
            if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                return;
            }

            for path in event.paths {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !files.iter().any(|f| f == name) {
                    continue;
                }
                let content = match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        log::warn!("⚠️ Could not read {}: {e}", path.display());
                        continue;
                    }
                };
                if last_seen.get(name) == Some(&content) {
                    continue;
                }
                last_seen.insert(name.to_string(), content.clone());

                log::info!("✏️  {name} changed");
                let mut actions = vec![EditorAction::SwitchFile(name.to_string()), EditorAction::Edit(content)];
                if autosave {
                    actions.push(EditorAction::Save);
                }
                for action in actions {
                    if sender.send(action).is_err() {
                        log::debug!("📭 Editor session closed, dropping file change");
                        return;
                    }
                }
            }
        })
        .map_err(|e| SpacesError::system_error("file watcher", &e.to_string()))?;

        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| SpacesError::system_error("file watcher", &e.to_string()))?;

        log::info!("👀 Watching {}", dir.display());
        Ok(Self { _watcher: watcher })
    }
}
