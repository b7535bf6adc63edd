/// Sandboxed preview document. Every render replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewFrame {
    pub document: String,
    pub renders: u64,
}

impl PreviewFrame {
    pub fn replace(&mut self, document: String) {
        self.document = document;
        self.renders += 1;
    }
}
