use crate::errors::SpacesResult;

pub trait ClipboardSink: Send + Sync {
    fn copy_text(&self, text: &str) -> SpacesResult<()>;
}
