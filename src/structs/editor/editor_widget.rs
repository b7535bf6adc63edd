use crate::enums::editor_mode::EditorMode;

/// The code-editing widget: one text buffer and its syntax mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorWidget {
    pub value: String,
    pub mode: EditorMode,
    /// Buffer edited since it was last bound to a file.
    pub dirty: bool,
}

impl EditorWidget {
    pub fn new(mode: EditorMode) -> Self {
        Self {
            value: String::new(),
            mode,
            dirty: false,
        }
    }

    pub fn bind(&mut self, value: String, mode: EditorMode) {
        self.value = value;
        self.mode = mode;
        self.dirty = false;
    }

    pub fn edit(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
    }
}
