//! The two capturable standard streams.

use std::fmt;

/// A process-wide standard output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Standard output, descriptor 1.
    Stdout,
    /// Standard error, descriptor 2.
    Stderr,
}

impl Stream {
    /// Well-known descriptor number of the stream.
    #[must_use]
    pub const fn fd(self) -> i32 {
        match self {
            Self::Stdout => 1,
            Self::Stderr => 2,
        }
    }

    /// Lowercase stream name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }

    /// Flushes the Rust-side `std::io` handle for this stream.
    ///
    /// Text written with `print!`/`write!` through `std::io::stdout()` sits in
    /// a line buffer until a newline or flush; flushing makes it reach the
    /// descriptor.
    pub(crate) fn flush_std(self) {
        use std::io::Write;

        let result = match self {
            Self::Stdout => std::io::stdout().flush(),
            Self::Stderr => std::io::stderr().flush(),
        };
        if let Err(e) = result {
            tracing::trace!(stream = %self, error = %e, "std handle flush failed");
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_descriptors() {
        assert_eq!(Stream::Stdout.fd(), 1);
        assert_eq!(Stream::Stderr.fd(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Stream::Stdout.to_string(), "stdout");
        assert_eq!(format!("{}", Stream::Stderr), "stderr");
    }
}
