//! Success markers printed as tests, suites and full runs complete.

use std::fmt;
use std::io::{self, Write};

use crate::report::{COLOR_RESET, FG_GREEN};

/// A success line for a test, a suite or a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `<name> ✓`
    Test(&'a str),
    /// `---> Suite <name> ✓` followed by a blank line.
    Suite(&'a str),
    /// Separator and green `FULL TEST FOR <name> ✓` banner.
    Full(&'a str),
}

impl Marker<'_> {
    /// Prints the marker to the process stdout.
    pub fn emit(&self) {
        if let Err(e) = self.write_to(&mut io::stdout().lock()) {
            tracing::trace!(error = %e, "failed to print success marker");
        }
    }

    /// Writes the marker to `out` and flushes it.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Marker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test(name) => writeln!(f, "{name} ✓"),
            Self::Suite(name) => write!(f, "---> Suite {name} ✓\n\n"),
            Self::Full(name) => {
                writeln!(f, "=========")?;
                writeln!(f, "{FG_GREEN}FULL TEST FOR {name} ✓{COLOR_RESET}")
            }
        }
    }
}

/// Prints `<name> ✓`.
pub fn test_success(name: &str) {
    Marker::Test(name).emit();
}

/// Prints `---> Suite <name> ✓` and a blank line.
pub fn suite_success(name: &str) {
    Marker::Suite(name).emit();
}

/// Prints the full-run banner.
pub fn full_success(name: &str) {
    Marker::Full(name).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts() {
        assert_eq!(Marker::Test("test_sum").to_string(), "test_sum ✓\n");
        assert_eq!(Marker::Suite("math").to_string(), "---> Suite math ✓\n\n");
        assert_eq!(
            Marker::Full("libft").to_string(),
            "=========\n\x1b[32mFULL TEST FOR libft ✓\x1b[0m\n"
        );
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        Marker::Suite("io").write_to(&mut out).unwrap();
        assert_eq!(out, "---> Suite io ✓\n\n".as_bytes());
    }
}
