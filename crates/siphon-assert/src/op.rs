//! Comparison operators.

use std::fmt;

/// Relational operator applied by a comparison assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CmpOp {
    /// All operators, in declaration order.
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Lt, Self::Le, Self::Gt, Self::Ge];

    /// Source-level symbol, as printed in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// Parses a symbol back into an operator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Evaluates `lhs <op> rhs`.
    ///
    /// Incomparable values (such as NaN) satisfy only `!=`.
    #[must_use]
    pub fn holds<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in CmpOp::ALL {
            assert_eq!(CmpOp::from_symbol(op.symbol()), Some(op));
            assert_eq!(op.to_string(), op.symbol());
        }
        assert_eq!(CmpOp::from_symbol("=<"), None);
    }

    #[test]
    fn test_holds_on_integers() {
        assert!(CmpOp::Eq.holds(&4, &(2 + 2)));
        assert!(!CmpOp::Eq.holds(&4, &5));
        assert!(CmpOp::Ne.holds(&4, &5));
        assert!(CmpOp::Lt.holds(&4, &5));
        assert!(CmpOp::Le.holds(&5, &5));
        assert!(!CmpOp::Gt.holds(&4, &5));
        assert!(CmpOp::Ge.holds(&5, &4));
    }

    #[test]
    fn test_holds_on_unsized_str() {
        assert!(CmpOp::Lt.holds("abc", "abd"));
        assert!(CmpOp::Ne.holds("abc", "abd"));
    }

    #[test]
    fn test_nan_only_unequal() {
        for op in CmpOp::ALL {
            assert_eq!(op.holds(&f64::NAN, &f64::NAN), op == CmpOp::Ne, "{op}");
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// holds agrees with the native operators on integers
        #[test]
        fn holds_matches_native(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(CmpOp::Eq.holds(&a, &b), a == b);
            prop_assert_eq!(CmpOp::Ne.holds(&a, &b), a != b);
            prop_assert_eq!(CmpOp::Lt.holds(&a, &b), a < b);
            prop_assert_eq!(CmpOp::Le.holds(&a, &b), a <= b);
            prop_assert_eq!(CmpOp::Gt.holds(&a, &b), a > b);
            prop_assert_eq!(CmpOp::Ge.holds(&a, &b), a >= b);
        }

        /// Eq and Ne are complementary for totally ordered values
        #[test]
        fn eq_ne_complementary(a in any::<u32>(), b in any::<u32>()) {
            prop_assert_ne!(CmpOp::Eq.holds(&a, &b), CmpOp::Ne.holds(&a, &b));
        }
    }
}
