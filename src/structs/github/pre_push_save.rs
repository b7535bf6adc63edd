use crate::enums::editor_kind::EditorKind;

/// Content of the open editor, persisted right before a push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrePushSave {
    pub kind: EditorKind,
    pub content: String,
}

impl PrePushSave {
    pub const fn endpoint(&self) -> &'static str {
        self.kind.save_endpoint()
    }
}
