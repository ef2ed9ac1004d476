// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # siphon-assert
//!
//! Assertion primitives for native unit tests.
//!
//! This crate provides:
//! - **Generic comparisons**: one routine over any `PartialOrd` value and a
//!   [`CmpOp`], with caller-chosen value formatting
//! - **Boolean and string checks**
//! - **Two failure policies**: [`Policy::Fatal`] exits the process with
//!   status 1, [`Policy::Soft`] abandons only the current test function
//! - **Success markers** for tests, suites and full runs
//!
//! Evaluation and policy are separate: every check returns an [`Outcome`],
//! and [`Outcome::enforce`] prints the diagnostic and applies the policy.
//! The macros wrap both steps.
//!
//! ## Example
//!
//! ```rust,no_run
//! use siphon_assert::{v_assert_cmp_pass, v_assert_str, vss, vts};
//!
//! fn test_sum() {
//!     v_assert_cmp_pass!(4, ==, 2 + 2);
//!     vts!();
//! }
//!
//! fn suite_math() {
//!     test_sum();
//!     v_assert_str!("abc", "abc");
//!     vss!();
//! }
//!
//! suite_math();
//! siphon_assert::full_success("math");
//! ```
//!
//! ## Diagnostics and captures
//!
//! Diagnostics are written to descriptor 1. If stdout is being captured when
//! an assertion fails, the report goes into the capture instead of the
//! terminal. Tear captures down before asserting on their contents.

#![warn(missing_docs)]

pub mod check;
pub mod location;
mod macros;
pub mod markers;
pub mod op;
pub mod outcome;
pub mod report;

pub use check::{check, check_str, compare, compare_with};
pub use location::Location;
pub use markers::{Marker, full_success, suite_success, test_success};
pub use op::CmpOp;
pub use outcome::{EXIT_ASSERTION_FAILED, Outcome, Policy};
pub use report::{Failure, FailureDetail};
