use std::fs;
use std::path::PathBuf;
use crate::errors::SpacesResult;
use crate::traits::preview_sink::PreviewSink;

/// Writes each preview document to a file, replacing the old one.
pub struct FilePreview {
    path: PathBuf,
}

impl FilePreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreviewSink for FilePreview {
    fn replace_document(&self, document: &str) -> SpacesResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, document)?;
        log::debug!("🖼️  Preview written to {}", self.path.display());
        Ok(())
    }
}
