//! Lifecycle state of a capture controller.

use std::fmt;

/// Where a controller is in its setup/teardown cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// The stream writes to its original destination.
    #[default]
    Idle,
    /// The stream's descriptor points at the capture pipe.
    Active,
}

impl CaptureState {
    /// Returns true while the stream is redirected.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Active => write!(f, "active"),
        }
    }
}
