use crate::config::constants::NAVBAR_SCROLL_THRESHOLD;

const BACKDROP_FILTER: &str = "blur(12px) saturate(180%)";
const BORDER_BOTTOM: &str = "1px solid rgba(236, 55, 80, 0.1)";

/// Navbar styling for a given page scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub border_bottom: &'static str,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        let background = if scroll_y > NAVBAR_SCROLL_THRESHOLD {
            "rgba(255, 255, 255, 0.95)"
        } else {
            "rgba(255, 255, 255, 0.8)"
        };

        Self {
            background,
            backdrop_filter: BACKDROP_FILTER,
            border_bottom: BORDER_BOTTOM,
        }
    }
}
