use std::time::Duration;

/// Fade used by the new-site modal.
pub const MODAL_FADE: Duration = Duration::from_millis(200);

/// Display/opacity of the new-site modal. Closing fades out first and only
/// hides once the fade has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
    FadingOut,
}

impl ModalVisibility {
    pub const fn open(self) -> Self {
        Self::Shown
    }

    pub const fn close(self) -> Self {
        match self {
            Self::Shown => Self::FadingOut,
            other => other,
        }
    }

    pub const fn finish_fade(self) -> Self {
        match self {
            Self::FadingOut => Self::Hidden,
            other => other,
        }
    }

    pub const fn is_displayed(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub const fn opacity(self) -> f32 {
        match self {
            Self::Shown => 1.0,
            Self::Hidden | Self::FadingOut => 0.0,
        }
    }
}
