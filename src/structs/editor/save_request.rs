/// Snapshot of one file to persist through the sites API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub site_id: String,
    pub filename: String,
    pub content: String,
    pub token: u64,
}
