/// In-page link that scrolls smoothly to its target instead of jumping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnchor {
    pub target_id: String,
}

impl ScrollAnchor {
    /// Only `#fragment` hrefs with a non-empty fragment are handled.
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix('#')
            .filter(|id| !id.is_empty())
            .map(|id| Self {
                target_id: id.to_string(),
            })
    }
}
