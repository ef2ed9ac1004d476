//! Assertion outcomes and failure policies.
//!
//! Evaluating an assertion never exits or returns on its own; it yields an
//! [`Outcome`]. The caller picks a [`Policy`] to decide what a failure does
//! to the run.

use std::io::{self, Write};
use std::ops::ControlFlow;

use crate::report::Failure;

/// Exit status of the process after a fatal assertion failure.
pub const EXIT_ASSERTION_FAILED: i32 = 1;

/// What a failed assertion does after printing its diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Terminate the process with [`EXIT_ASSERTION_FAILED`].
    #[default]
    Fatal,
    /// Abandon the current test function; the suite carries on.
    Soft,
}

/// Result of evaluating an assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an assertion outcome does nothing unless enforced"]
pub enum Outcome {
    /// The assertion held.
    Pass,
    /// The assertion failed.
    Fail(Failure),
}

impl Outcome {
    /// Returns true if the assertion held.
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The failure, if any.
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Pass => None,
            Self::Fail(failure) => Some(failure),
        }
    }

    /// Applies `policy`, printing any diagnostic to the process stdout.
    ///
    /// The diagnostic goes to descriptor 1 through `std::io::stdout()`, so it
    /// ends up in an open stdout capture if there is one.
    ///
    /// Returns `Continue` on pass and `Break` on a soft failure. A fatal
    /// failure does not return.
    pub fn enforce(self, policy: Policy) -> ControlFlow<()> {
        self.enforce_with(policy, &mut io::stdout().lock())
    }

    /// Applies `policy`, printing any diagnostic to `out`.
    pub fn enforce_with<W: Write + ?Sized>(self, policy: Policy, out: &mut W) -> ControlFlow<()> {
        let Self::Fail(failure) = self else {
            return ControlFlow::Continue(());
        };

        if let Err(e) = failure.write_to(out) {
            tracing::trace!(error = %e, "failed to write assertion diagnostic");
        }
        tracing::debug!(
            ?policy,
            file = failure.location.file,
            line = failure.location.line,
            function = failure.location.function,
            "assertion failed"
        );

        match policy {
            Policy::Fatal => std::process::exit(EXIT_ASSERTION_FAILED),
            Policy::Soft => ControlFlow::Break(()),
        }
    }
}
