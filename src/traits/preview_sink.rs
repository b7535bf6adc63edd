use crate::errors::SpacesResult;

/// Where a rendered preview document goes. Each call replaces the previous document.
pub trait PreviewSink: Send + Sync {
    fn replace_document(&self, document: &str) -> SpacesResult<()>;
}
