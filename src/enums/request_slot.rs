/// Independent sequence of requests whose responses may go stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestSlot {
    Load(String),
    Save(String),
    Deploy,
}
