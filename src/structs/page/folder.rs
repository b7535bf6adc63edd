/// Collapsible folder in the file sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub expanded: bool,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: true,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub const fn chevron_icon(&self) -> &'static str {
        if self.expanded {
            "fa-chevron-down"
        } else {
            "fa-chevron-right"
        }
    }

    pub const fn content_display(&self) -> &'static str {
        if self.expanded {
            "block"
        } else {
            "none"
        }
    }
}
