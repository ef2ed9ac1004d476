//! Failure diagnostics.
//!
//! The layout is fixed; people read it in test logs:
//!
//! ```text
//! <red>FAILED !!!\t<reset>FILE(<path>) | LINE(<n>) | FUNCTION(<name>)
//! \tEXPRESSION\t>>> <expr-text>
//! \tVALUES\t\t>>> <value1> <op> <value2>
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::location::Location;

/// ANSI reset.
pub const COLOR_RESET: &str = "\x1b[0m";
/// ANSI red background.
pub const BG_RED: &str = "\x1b[41m";
/// ANSI green foreground.
pub const FG_GREEN: &str = "\x1b[32m";

/// What went wrong in a failed assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDetail {
    /// A relational comparison was false.
    Comparison {
        /// Source text, e.g. `4 == 2 + 2`.
        expression: String,
        /// Formatted operands around the operator, e.g. `4 == 5`.
        values: String,
    },
    /// A boolean expression was false.
    Expression {
        /// Source text of the expression.
        text: String,
    },
    /// Two strings differed.
    Strings {
        /// Expected text.
        expected: String,
        /// Actual text.
        actual: String,
    },
}

/// A failed assertion, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Call site.
    pub location: Location,
    /// Failure specifics.
    pub detail: FailureDetail,
}

impl Failure {
    /// Creates a failure.
    #[must_use]
    pub const fn new(location: Location, detail: FailureDetail) -> Self {
        Self { location, detail }
    }

    /// Writes the diagnostic to `out` and flushes it.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BG_RED}FAILED !!!\t{COLOR_RESET}{}", self.location)?;
        match &self.detail {
            FailureDetail::Comparison { expression, values } => {
                write!(f, "\n\tEXPRESSION\t>>> {expression}")?;
                writeln!(f, "\n\tVALUES\t\t>>> {values}")
            }
            FailureDetail::Expression { text } => writeln!(f, "\n\tExpression({text})"),
            FailureDetail::Strings { expected, actual } => {
                write!(f, "\n\tStrcmp >>>")?;
                write!(f, "\n\tExpected\t--> [{expected}]")?;
                writeln!(f, "\n\tActual\t\t--> [{actual}]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> Location {
        Location::new("tests/sum.rs", 7, "test_sum")
    }

    #[test]
    fn test_comparison_layout() {
        let failure = Failure::new(
            here(),
            FailureDetail::Comparison {
                expression: "4 == 5".into(),
                values: "4 == 5".into(),
            },
        );
        assert_eq!(
            failure.to_string(),
            "\x1b[41mFAILED !!!\t\x1b[0mFILE(tests/sum.rs) | LINE(7) | FUNCTION(test_sum)\
             \n\tEXPRESSION\t>>> 4 == 5\
             \n\tVALUES\t\t>>> 4 == 5\n"
        );
    }

    #[test]
    fn test_expression_layout() {
        let failure = Failure::new(
            here(),
            FailureDetail::Expression {
                text: "list.is_empty()".into(),
            },
        );
        assert!(failure.to_string().ends_with("\n\tExpression(list.is_empty())\n"));
    }

    #[test]
    fn test_strings_layout() {
        let failure = Failure::new(
            here(),
            FailureDetail::Strings {
                expected: "abc".into(),
                actual: "abd".into(),
            },
        );
        assert!(failure.to_string().ends_with(
            "\n\tStrcmp >>>\n\tExpected\t--> [abc]\n\tActual\t\t--> [abd]\n"
        ));
    }

    #[test]
    fn test_write_to() {
        let failure = Failure::new(
            here(),
            FailureDetail::Expression { text: "ok".into() },
        );
        let mut out = Vec::new();
        failure.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), failure.to_string());
    }
}
