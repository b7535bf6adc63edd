/// Sidebar file entries with at most one active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<String>,
    active: Option<usize>,
}

impl FileList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Marks `name` active and clears every other entry. Unknown names change nothing.
    pub fn open(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|entry| entry == name) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.and_then(|index| self.entries.get(index)).map(String::as_str)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active() == Some(name)
    }
}
