use crate::errors::{SpacesError, SpacesResult};
use crate::traits::clipboard_sink::ClipboardSink;

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&self, text: &str) -> SpacesResult<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| SpacesError::system_error("clipboard access", &e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SpacesError::system_error("clipboard write", &e.to_string()))
    }
}
