use crate::config::constants::{INDEX_FILE, SCRIPT_FILE, STYLES_FILE};
use crate::structs::editor::file_set::FileSet;

pub struct PreviewRenderer;

impl PreviewRenderer {
    /// Builds the whole preview document from the three site files.
    ///
    /// Output depends only on the three contents. Unloaded files render as
    /// empty. Contents are inlined verbatim; the frame serving this document is
    /// sandboxed.
    pub fn render(files: &FileSet) -> String {
        Self::render_parts(
            files.content_or_empty(INDEX_FILE),
            files.content_or_empty(STYLES_FILE),
            files.content_or_empty(SCRIPT_FILE),
        )
    }

    pub fn render_parts(html: &str, css: &str, js: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <style>{css}</style>\n\
             </head>\n\
             <body>\n\
             {html}\n\
             <script>{js}</script>\n\
             </body>\n\
             </html>\n"
        )
    }
}
