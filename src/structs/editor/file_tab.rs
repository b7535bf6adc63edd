#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTab {
    pub filename: String,
    pub active: bool,
}
