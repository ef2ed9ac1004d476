//! Configuration for stream capture behavior.

/// Configuration for a [`StreamCapture`](crate::StreamCapture).
///
/// Use [`CaptureConfig::builder()`] for a fluent configuration API:
///
/// ```rust
/// use siphon_capture::CaptureConfig;
///
/// let config = CaptureConfig::builder()
///     .unbuffered(true)   // C stdio writes reach the pipe immediately
///     .fail_fast(false)   // Return OS errors instead of exiting
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // These are independent flags, not state
pub struct CaptureConfig {
    /// Force the C stdio stream to unbuffered mode (`_IONBF`) during capture.
    unbuffered: bool,
    /// Set the C stdio stream to line-buffered mode (`_IOLBF`) after teardown.
    restore_line_buffered: bool,
    /// Flush the Rust `std::io` handle before setup, read and teardown.
    flush_std: bool,
    /// Whether OS failures terminate the process.
    ///
    /// - `true`: exit with the error's status (10-13)
    /// - `false`: return `Err(CaptureError)`
    fail_fast: bool,
}

impl CaptureConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub const fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::new()
    }

    /// Whether C stdio is unbuffered while capturing.
    #[must_use]
    pub const fn unbuffered(&self) -> bool {
        self.unbuffered
    }

    /// Whether C stdio goes back to line buffering after teardown.
    #[must_use]
    pub const fn restore_line_buffered(&self) -> bool {
        self.restore_line_buffered
    }

    /// Whether the Rust `std::io` handle is flushed at lifecycle boundaries.
    #[must_use]
    pub const fn flush_std(&self) -> bool {
        self.flush_std
    }

    /// Whether OS failures terminate the process.
    #[must_use]
    pub const fn fail_fast(&self) -> bool {
        self.fail_fast
    }
}

impl Default for CaptureConfig {
    /// Default configuration: unbuffered capture, line-buffered restore,
    /// std handle flushing, fail-fast.
    fn default() -> Self {
        CaptureConfigBuilder::new().build()
    }
}

/// Builder for [`CaptureConfig`].
#[derive(Debug, Clone, Copy)]
pub struct CaptureConfigBuilder {
    config: CaptureConfig,
}

impl CaptureConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: CaptureConfig {
                unbuffered: true,
                restore_line_buffered: true,
                flush_std: true,
                fail_fast: true,
            },
        }
    }

    /// Force unbuffered C stdio during capture.
    ///
    /// Default: `true`
    #[must_use]
    pub const fn unbuffered(mut self, value: bool) -> Self {
        self.config.unbuffered = value;
        self
    }

    /// Restore line-buffered C stdio after teardown.
    ///
    /// Default: `true`
    #[must_use]
    pub const fn restore_line_buffered(mut self, value: bool) -> Self {
        self.config.restore_line_buffered = value;
        self
    }

    /// Flush the Rust `std::io` handle before setup, each read and teardown.
    ///
    /// Default: `true`
    #[must_use]
    pub const fn flush_std(mut self, value: bool) -> Self {
        self.config.flush_std = value;
        self
    }

    /// Terminate the process on OS failures.
    ///
    /// - `true` (default): exit with status 10-13
    /// - `false`: return the error to the caller
    #[must_use]
    pub const fn fail_fast(mut self, value: bool) -> Self {
        self.config.fail_fast = value;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub const fn build(self) -> CaptureConfig {
        self.config
    }
}

impl Default for CaptureConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
