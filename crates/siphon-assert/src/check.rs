//! Assertion evaluation.
//!
//! One generic comparison routine replaces a family of per-type checks: the
//! value type supplies the ordering, the caller supplies the formatting.

use std::fmt::Display;

use crate::location::Location;
use crate::op::CmpOp;
use crate::outcome::Outcome;
use crate::report::{Failure, FailureDetail};

/// Evaluates `expected <op> actual`, formatting operands with `format` on
/// failure.
///
/// `expression` is the source text of the whole comparison.
///
/// ```rust
/// use siphon_assert::{CmpOp, Location, compare_with};
///
/// let here = Location::new("doc.rs", 1, "main");
/// let ptr = 0x1000usize;
/// let outcome = compare_with(here, "ptr == 0x2000", CmpOp::Eq, &ptr, &0x2000, |v| {
///     format!("{v:#x}")
/// });
/// let failure = outcome.failure().unwrap();
/// assert!(failure.to_string().contains("0x1000 == 0x2000"));
/// ```
pub fn compare_with<T, F>(
    location: Location,
    expression: &str,
    op: CmpOp,
    expected: &T,
    actual: &T,
    format: F,
) -> Outcome
where
    T: PartialOrd + ?Sized,
    F: Fn(&T) -> String,
{
    if op.holds(expected, actual) {
        return Outcome::Pass;
    }

    Outcome::Fail(Failure::new(
        location,
        FailureDetail::Comparison {
            expression: expression.to_string(),
            values: format!("{} {op} {}", format(expected), format(actual)),
        },
    ))
}

/// [`compare_with`] using the values' `Display` output.
pub fn compare<T>(location: Location, expression: &str, op: CmpOp, expected: &T, actual: &T) -> Outcome
where
    T: PartialOrd + Display + ?Sized,
{
    compare_with(location, expression, op, expected, actual, |v| v.to_string())
}

/// Checks that a boolean expression holds.
pub fn check(location: Location, expression: &str, value: bool) -> Outcome {
    if value {
        Outcome::Pass
    } else {
        Outcome::Fail(Failure::new(
            location,
            FailureDetail::Expression {
                text: expression.to_string(),
            },
        ))
    }
}

/// Checks that two strings are byte-for-byte equal.
pub fn check_str(location: Location, expected: &str, actual: &str) -> Outcome {
    if expected == actual {
        Outcome::Pass
    } else {
        Outcome::Fail(Failure::new(
            location,
            FailureDetail::Strings {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERE: Location = Location::new("check.rs", 3, "t");

    #[test]
    fn test_compare_passes() {
        assert!(compare(HERE, "4 == 2 + 2", CmpOp::Eq, &4, &(2 + 2)).is_pass());
        assert!(compare(HERE, "1 < 2", CmpOp::Lt, &1, &2).is_pass());
    }

    #[test]
    fn test_compare_failure_detail() {
        let outcome = compare(HERE, "4 == 5", CmpOp::Eq, &4, &5);
        let failure = outcome.failure().unwrap();
        assert_eq!(
            failure.detail,
            FailureDetail::Comparison {
                expression: "4 == 5".into(),
                values: "4 == 5".into(),
            }
        );
        assert_eq!(failure.location, HERE);
    }

    #[test]
    fn test_compare_values_use_operator_symbol() {
        let outcome = compare(HERE, "a >= b", CmpOp::Ge, &1u8, &9u8);
        let text = outcome.failure().unwrap().to_string();
        assert!(text.contains("EXPRESSION\t>>> a >= b"));
        assert!(text.contains("VALUES\t\t>>> 1 >= 9"));
    }

    #[test]
    fn test_compare_with_custom_format() {
        let outcome = compare_with(HERE, "c == 'y'", CmpOp::Eq, &'x', &'y', |c| format!("'{c}'"));
        let text = outcome.failure().unwrap().to_string();
        assert!(text.contains(">>> 'x' == 'y'"));
    }

    #[test]
    fn test_compare_unsized() {
        assert!(compare(HERE, "s == s", CmpOp::Eq, "abc", "abc").is_pass());
    }

    #[test]
    fn test_check() {
        assert!(check(HERE, "true", true).is_pass());
        let outcome = check(HERE, "v.is_empty()", false);
        assert_eq!(
            outcome.failure().unwrap().detail,
            FailureDetail::Expression {
                text: "v.is_empty()".into()
            }
        );
    }

    #[test]
    fn test_check_str() {
        assert!(check_str(HERE, "abc", "abc").is_pass());

        let outcome = check_str(HERE, "abc", "abd");
        let text = outcome.failure().unwrap().to_string();
        assert!(text.contains("[abc]"));
        assert!(text.contains("[abd]"));
    }
}
