/// State of the video element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaState {
    /// Still loading, or the last load failed.
    #[default]
    Unavailable,
    Loaded,
}

/// Outcome reported by the media pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Loaded,
    Error,
}

impl MediaEvent {
    /// Visibility of `(video, placeholder)` after this event.
    #[must_use]
    pub fn visibility(self) -> (bool, bool) {
        match self {
            Self::Loaded => (true, false),
            Self::Error => (false, true),
        }
    }

    #[must_use]
    pub fn resulting_state(self) -> MediaState {
        match self {
            Self::Loaded => MediaState::Loaded,
            Self::Error => MediaState::Unavailable,
        }
    }
}
