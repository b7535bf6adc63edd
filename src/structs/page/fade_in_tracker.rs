use std::collections::HashSet;
use crate::config::constants::FADE_IN_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStyle {
    pub opacity: f32,
    pub translate_y_px: f32,
}

impl FadeStyle {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y_px: 20.0,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        translate_y_px: 0.0,
    };
}

/// Fade-in-on-scroll for feature cards. Once shown a card stays shown.
#[derive(Debug, Clone)]
pub struct FadeInTracker {
    threshold: f64,
    shown: HashSet<String>,
}

impl Default for FadeInTracker {
    fn default() -> Self {
        Self::new(FADE_IN_THRESHOLD)
    }
}

impl FadeInTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            shown: HashSet::new(),
        }
    }

    /// Feeds one intersection entry. Returns true if the element just became visible.
    pub fn observe(&mut self, element_id: &str, intersection_ratio: f64) -> bool {
        if intersection_ratio < self.threshold || intersection_ratio <= 0.0 {
            return false;
        }
        self.shown.insert(element_id.to_string())
    }

    pub fn style(&self, element_id: &str) -> FadeStyle {
        if self.shown.contains(element_id) {
            FadeStyle::SHOWN
        } else {
            FadeStyle::HIDDEN
        }
    }
}
