//! Error types for stream capture operations.
//!
//! OS-level failures carry the exit status the process terminates with under
//! the fail-fast policy. Lifecycle misuse has no exit status and is always
//! returned to the caller.

#[cfg(unix)]
use nix::errno::Errno;

use crate::stream::Stream;

/// Result type alias for capture operations.
pub type CaptureResult<T> = std::result::Result<T, CaptureError>;

/// Exit status when the capture pipe cannot be created.
pub const EXIT_PIPE: i32 = 10;
/// Exit status when a standard descriptor cannot be duplicated or replaced.
pub const EXIT_DUPLICATE: i32 = 11;
/// Exit status when reading the capture pipe fails.
pub const EXIT_READ: i32 = 12;
/// Exit status when the original descriptor cannot be put back.
pub const EXIT_RESTORE: i32 = 13;

/// Raw OS error number, independent of platform support.
#[cfg(unix)]
pub type OsErrno = Errno;

/// Raw OS error number, independent of platform support.
#[cfg(not(unix))]
pub type OsErrno = i32;

/// Capture errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// `pipe(2)` failed.
    #[error("pipe() failed while capturing {stream}: {errno}")]
    Pipe {
        /// Stream being captured.
        stream: Stream,
        /// OS error.
        errno: OsErrno,
    },

    /// `dup(2)` of the original descriptor failed.
    #[error("dup() of {stream} descriptor failed: {errno}")]
    Duplicate {
        /// Stream being captured.
        stream: Stream,
        /// OS error.
        errno: OsErrno,
    },

    /// `dup2(2)` installing the pipe write end failed.
    #[error("dup2() installing pipe over {stream} failed: {errno}")]
    Install {
        /// Stream being captured.
        stream: Stream,
        /// OS error.
        errno: OsErrno,
    },

    /// `read(2)` on the pipe read end failed.
    #[error("read() from {stream} capture pipe failed: {errno}")]
    Read {
        /// Stream being captured.
        stream: Stream,
        /// OS error.
        errno: OsErrno,
    },

    /// `dup2(2)` restoring the original descriptor failed.
    #[error("dup2() restoring {stream} failed: {errno}")]
    Restore {
        /// Stream being captured.
        stream: Stream,
        /// OS error.
        errno: OsErrno,
    },

    /// Read or teardown without an active capture.
    #[error("{0} is not being captured")]
    NotActive(Stream),

    /// Setup while a capture of the same stream is already open.
    #[error("{0} is already being captured")]
    AlreadyActive(Stream),

    /// Read into a buffer with no room for the terminating NUL.
    #[error("read buffer must hold at least one byte")]
    ZeroCapacity,

    /// Descriptor capture is not available on this platform.
    #[error("descriptor capture is unsupported on this platform")]
    Unsupported,
}

impl CaptureError {
    /// Process exit status used by the fail-fast policy.
    ///
    /// Returns `None` for misuse errors, which never terminate the process.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Pipe { .. } => Some(EXIT_PIPE),
            Self::Duplicate { .. } | Self::Install { .. } => Some(EXIT_DUPLICATE),
            Self::Read { .. } => Some(EXIT_READ),
            Self::Restore { .. } => Some(EXIT_RESTORE),
            Self::NotActive(_) | Self::AlreadyActive(_) | Self::ZeroCapacity | Self::Unsupported => {
                None
            }
        }
    }

    /// Returns true if this error terminates the process under fail-fast.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.exit_code().is_some()
    }

    /// Underlying OS error, if any.
    #[must_use]
    pub const fn errno(&self) -> Option<OsErrno> {
        match self {
            Self::Pipe { errno, .. }
            | Self::Duplicate { errno, .. }
            | Self::Install { errno, .. }
            | Self::Read { errno, .. }
            | Self::Restore { errno, .. } => Some(*errno),
            Self::NotActive(_) | Self::AlreadyActive(_) | Self::ZeroCapacity | Self::Unsupported => {
                None
            }
        }
    }

    /// Stream the error relates to, if any.
    #[must_use]
    pub const fn stream(&self) -> Option<Stream> {
        match self {
            Self::Pipe { stream, .. }
            | Self::Duplicate { stream, .. }
            | Self::Install { stream, .. }
            | Self::Read { stream, .. }
            | Self::Restore { stream, .. } => Some(*stream),
            Self::NotActive(stream) | Self::AlreadyActive(stream) => Some(*stream),
            Self::ZeroCapacity | Self::Unsupported => None,
        }
    }

    /// Short line printed to stderr before a fail-fast exit.
    #[must_use]
    pub const fn banner(&self) -> &'static str {
        match self {
            Self::Pipe { .. } => "Pipe() error !",
            Self::Duplicate { .. } => "Dup() error !",
            Self::Install { .. } | Self::Restore { .. } => "Dup2() error !",
            Self::Read { .. } => "Read() error !",
            Self::NotActive(_) | Self::AlreadyActive(_) | Self::ZeroCapacity | Self::Unsupported => {
                "Capture error !"
            }
        }
    }
}
