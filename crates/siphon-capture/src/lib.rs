// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # siphon-capture
//!
//! Capture of the process-wide standard output and standard error streams
//! for tests that assert on printed text.
//!
//! A [`StreamCapture`] swaps a stream's well-known descriptor (1 or 2) for the
//! write end of a pipe. Every writer in the process, including C code and
//! libraries the test does not control, is rerouted without knowing it. The
//! test drains the pipe, then puts the original destination back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::io::Write;
//! use siphon_capture::StreamCapture;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut out = StreamCapture::stdout();
//!     out.setup()?;
//!     std::io::stdout().write_all(b"42\n")?;
//!
//!     let mut buf = [0u8; 16];
//!     let n = out.read(&mut buf)?;
//!     out.teardown()?;
//!
//!     assert_eq!(&buf[..n], b"42\n");
//!     assert_eq!(buf[n], 0);
//!     Ok(())
//! }
//! ```
//!
//! ## Lifecycle
//!
//! | Step | Effect |
//! |------|--------|
//! | `setup` | unbuffer C stdio, `dup` the descriptor, `pipe`, `dup2` the write end over it |
//! | `read` | one `read(2)` of up to `capacity - 1` bytes, NUL-terminated |
//! | `teardown` | `dup2` the saved descriptor back, close all three, line-buffer C stdio |
//!
//! ## Fail-fast
//!
//! OS failures mean the capture channel can no longer be trusted. By default
//! the process exits immediately:
//!
//! | Exit status | Failing call |
//! |-------------|--------------|
//! | 10 | `pipe()` |
//! | 11 | `dup()` / `dup2()` during setup |
//! | 12 | `read()` |
//! | 13 | `dup2()` during teardown |
//!
//! Disable with [`CaptureConfigBuilder::fail_fast`] to receive the
//! [`CaptureError`] instead.
//!
//! ## Constraints
//!
//! - One cycle per stream at a time; the descriptors are process globals.
//! - `read` blocks until data arrives. The pipe holds a bounded amount of
//!   data (64 KiB on Linux); writing more than that without reading blocks
//!   the writer.
//! - Diagnostics printed while a capture is open are captured too.

#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod controller;
mod error;
mod state;
mod stream;

#[cfg(unix)]
mod unix;

#[cfg(not(unix))]
mod unsupported;

#[cfg(unix)]
use unix as sys;

#[cfg(not(unix))]
use unsupported as sys;

pub use config::{CaptureConfig, CaptureConfigBuilder};
pub use controller::StreamCapture;
pub use error::{
    CaptureError, CaptureResult, EXIT_DUPLICATE, EXIT_PIPE, EXIT_READ, EXIT_RESTORE, OsErrno,
};
pub use state::CaptureState;
pub use stream::Stream;

/// Number of descriptors currently open in this process.
///
/// On Linux, counts the entries of `/proc/self/fd`; on other Unix systems,
/// `/dev/fd`. Returns `0` where neither is available. Use the difference
/// between two calls to detect descriptor leaks.
///
/// # Example
///
/// ```rust,no_run
/// use siphon_capture::{StreamCapture, open_descriptor_count};
///
/// let before = open_descriptor_count();
/// let mut capture = StreamCapture::stderr();
/// capture.setup()?;
/// capture.teardown()?;
/// assert_eq!(open_descriptor_count(), before);
/// # Ok::<(), siphon_capture::CaptureError>(())
/// ```
#[must_use]
pub fn open_descriptor_count() -> usize {
    sys::open_descriptor_count()
}
