use std::collections::HashMap;

/// In-memory contents of the site's files, in tab order.
///
/// An entry is `None` until its load succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    order: Vec<String>,
    contents: HashMap<String, Option<String>>,
}

impl FileSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.track(&name.into());
        }
        set
    }

    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.contents.get(name).and_then(|c| c.as_deref())
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Content of `name`, or the empty string if it was never loaded.
    pub fn content_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, content: String) {
        self.track(name);
        self.contents.insert(name.to_string(), Some(content));
    }

    /// Adds `name` as an unloaded entry if it is not known yet.
    pub fn track(&mut self, name: &str) {
        if !self.contents.contains_key(name) {
            self.order.push(name.to_string());
            self.contents.insert(name.to_string(), None);
        }
    }
}
