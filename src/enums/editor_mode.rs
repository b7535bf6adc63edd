use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Syntax mode bound to the editing widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorMode {
    Markup,
    Stylesheet,
    Script,
    /// No mode registered for the extension. Highlighting is off but editing works.
    Default,
}

static MODES_BY_EXTENSION: Lazy<HashMap<&'static str, EditorMode>> = Lazy::new(|| {
    HashMap::from([
        ("html", EditorMode::Markup),
        ("css", EditorMode::Stylesheet),
        ("js", EditorMode::Script),
    ])
});

impl EditorMode {
    /// Mode for a filename, keyed on the text after its last `.`.
    pub fn for_filename(filename: &str) -> Self {
        let extension = filename.rsplit('.').next().unwrap_or_default();
        MODES_BY_EXTENSION
            .get(extension)
            .copied()
            .unwrap_or(Self::Default)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Stylesheet => "css",
            Self::Script => "javascript",
            Self::Default => "text",
        }
    }
}
