//! Lifecycle state of the embedded game frame.

/// Starts at `Loading` when the page renders. `Loaded` and `Errored` are
/// terminal for the page's lifetime; the user must reload to retry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameLoadState {
    #[default]
    Loading,
    Loaded,
    Errored,
}

impl FrameLoadState {
    /// The iframe's native `load` signal fired.
    pub fn loaded(self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            terminal => terminal,
        }
    }

    /// The iframe's native `error` signal fired.
    pub fn errored(self) -> Self {
        match self {
            Self::Loading => Self::Errored,
            terminal => terminal,
        }
    }

    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    pub fn is_errored(self) -> bool {
        self == Self::Errored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_signal_reaches_loaded_exactly_once() {
        let s = FrameLoadState::default();
        assert!(s.is_loading());
        let s = s.loaded();
        assert_eq!(s, FrameLoadState::Loaded);
        // Late duplicate signals are ignored.
        assert_eq!(s.loaded(), FrameLoadState::Loaded);
        assert_eq!(s.errored(), FrameLoadState::Loaded);
    }

    #[test]
    fn error_signal_is_terminal() {
        let s = FrameLoadState::default().errored();
        assert_eq!(s, FrameLoadState::Errored);
        assert!(s.is_errored());
        assert_eq!(s.loaded(), FrameLoadState::Errored);
        assert_eq!(s.errored(), FrameLoadState::Errored);
    }

    #[test]
    fn overlay_projection_follows_state() {
        assert!(FrameLoadState::Loading.is_loading());
        assert!(!FrameLoadState::Loaded.is_loading());
        assert!(!FrameLoadState::Loaded.is_errored());
        assert!(!FrameLoadState::Errored.is_loading());
        assert!(FrameLoadState::Errored.is_errored());
    }
}
