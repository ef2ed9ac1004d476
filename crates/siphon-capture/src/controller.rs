//! Stream capture controller.
//!
//! One [`StreamCapture`] per stream. Setup swaps the stream's descriptor for
//! the write end of a pipe, Read drains the pipe, Teardown swaps the original
//! back and closes every descriptor the cycle opened.

use std::io::Write;

use crate::config::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::state::CaptureState;
use crate::stream::Stream;
use crate::sys;

/// Redirects one standard stream into an in-memory pipe.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::Write;
/// use siphon_capture::StreamCapture;
///
/// let mut capture = StreamCapture::stdout();
/// capture.setup()?;
/// std::io::stdout().write_all(b"hello\n")?;
/// let text = capture.read_string(64)?;
/// capture.teardown()?;
/// assert_eq!(text, "hello\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Blocking
///
/// `read` blocks until at least one byte is queued. Reading a capture that
/// nothing has written to hangs the calling thread.
///
/// # Diagnostics while capturing
///
/// Anything written to the stream during the cycle, including assertion
/// failure reports, lands in the pipe rather than on the terminal.
#[derive(Debug)]
pub struct StreamCapture {
    stream: Stream,
    config: CaptureConfig,
    channel: Option<sys::Channel>,
    last_read_len: usize,
}

impl StreamCapture {
    /// Creates an idle controller for `stream` with the default configuration.
    #[must_use]
    pub const fn new(stream: Stream) -> Self {
        Self::with_config(stream, CaptureConfig::builder().build())
    }

    /// Creates an idle controller with a custom configuration.
    #[must_use]
    pub const fn with_config(stream: Stream, config: CaptureConfig) -> Self {
        Self {
            stream,
            config,
            channel: None,
            last_read_len: 0,
        }
    }

    /// Controller for standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    /// Controller for standard error.
    #[must_use]
    pub const fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }

    /// The stream this controller redirects.
    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> CaptureConfig {
        self.config
    }

    /// Byte count of the most recent read, excluding the NUL terminator.
    #[must_use]
    pub const fn last_read_len(&self) -> usize {
        self.last_read_len
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CaptureState {
        if self.channel.is_some() {
            CaptureState::Active
        } else {
            CaptureState::Idle
        }
    }

    /// Returns true between setup and teardown.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Raw `(saved, pipe_read, pipe_write)` descriptors while active.
    #[must_use]
    pub fn descriptors(&self) -> Option<(i32, i32, i32)> {
        self.channel.as_ref().map(sys::Channel::raw_fds)
    }

    /// Redirects the stream into a new pipe.
    ///
    /// # Errors
    ///
    /// - [`CaptureError::AlreadyActive`] if a cycle is already open.
    /// - [`CaptureError::Duplicate`], [`CaptureError::Pipe`],
    ///   [`CaptureError::Install`] on OS failure; with fail-fast enabled these
    ///   exit the process with status 11, 10 and 11 instead.
    pub fn setup(&mut self) -> CaptureResult<()> {
        if self.channel.is_some() {
            return Err(CaptureError::AlreadyActive(self.stream));
        }

        // Logged before the swap, or a subscriber writing to this stream
        // would feed the event into its own capture.
        tracing::debug!(stream = %self.stream, fd = self.stream.fd(), "installing capture");
        let channel = sys::open(self.stream, self.config).map_err(|e| self.escalate(e))?;

        self.channel = Some(channel);
        self.last_read_len = 0;
        Ok(())
    }

    /// Drains up to `buf.len() - 1` queued bytes into `buf` and NUL-terminates.
    ///
    /// Returns the number of bytes read, also kept as [`last_read_len`].
    /// Data once read is gone from the pipe.
    ///
    /// [`last_read_len`]: Self::last_read_len
    ///
    /// # Errors
    ///
    /// - [`CaptureError::ZeroCapacity`] if `buf` is empty.
    /// - [`CaptureError::NotActive`] outside a setup/teardown cycle.
    /// - [`CaptureError::Read`] on OS failure (exit status 12 under fail-fast).
    pub fn read(&mut self, buf: &mut [u8]) -> CaptureResult<usize> {
        let Some(limit) = buf.len().checked_sub(1) else {
            return Err(CaptureError::ZeroCapacity);
        };
        let Some(channel) = self.channel.as_ref() else {
            return Err(CaptureError::NotActive(self.stream));
        };

        if self.config.flush_std() {
            self.stream.flush_std();
        }

        let n = if limit == 0 {
            0
        } else {
            sys::read(channel, self.stream, &mut buf[..limit]).map_err(|e| self.escalate(e))?
        };
        buf[n] = 0;

        self.last_read_len = n;
        tracing::trace!(stream = %self.stream, bytes = n, "capture drained");
        Ok(n)
    }

    /// Reads into a fresh buffer of `capacity` bytes and returns the text.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read).
    pub fn read_string(&mut self, capacity: usize) -> CaptureResult<String> {
        let mut buf = vec![0u8; capacity];
        let n = self.read(&mut buf)?;
        buf.truncate(n);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Restores the original destination and closes the pipe and saved
    /// descriptor. Unread pipe contents are discarded.
    ///
    /// If the restore fails the controller stays [`Active`] with every
    /// descriptor still open, so the stream keeps draining into a live pipe
    /// and `teardown` can be retried.
    ///
    /// [`Active`]: CaptureState::Active
    ///
    /// # Errors
    ///
    /// - [`CaptureError::NotActive`] outside a cycle.
    /// - [`CaptureError::Restore`] on OS failure (exit status 13 under
    ///   fail-fast).
    pub fn teardown(&mut self) -> CaptureResult<()> {
        let Some(channel) = self.channel.as_ref() else {
            return Err(CaptureError::NotActive(self.stream));
        };

        sys::restore(channel, self.stream, self.config).map_err(|e| self.escalate(e))?;
        if let Some(channel) = self.channel.take() {
            sys::release(channel, self.stream, self.config);
        }
        tracing::debug!(stream = %self.stream, "capture restored");
        Ok(())
    }

    /// Applies the fail-fast policy to an OS failure.
    fn escalate(&self, err: CaptureError) -> CaptureError {
        if self.config.fail_fast() {
            if let Some(code) = err.exit_code() {
                abort(self.stream, err, code);
            }
        }
        err
    }
}

fn abort(stream: Stream, err: CaptureError, code: i32) -> ! {
    tracing::error!(%stream, error = %err, code, "capture channel broken, exiting");
    // A failing stderr capture would swallow its own report.
    if stream != Stream::Stderr {
        let _ = writeln!(std::io::stderr(), "{}", err.banner());
    }
    std::process::exit(code)
}

impl Drop for StreamCapture {
    fn drop(&mut self) {
        if let Some(channel) = self.channel.take() {
            tracing::warn!(stream = %self.stream, "capture dropped while active, restoring");
            match sys::restore(&channel, self.stream, self.config) {
                Ok(()) => sys::release(channel, self.stream, self.config),
                // Nothing can keep the channel alive past drop; the stream is
                // left on a closed pipe.
                Err(e) => {
                    tracing::warn!(stream = %self.stream, error = %e, "restore on drop failed");
                }
            }
        }
    }
}
