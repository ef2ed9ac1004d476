//! Assertion and marker macros.
//!
//! Every assertion comes in two flavors:
//!
//! - `v_assert*!` prints the diagnostic and exits the process with status 1.
//! - `v_assert*_pass!` prints the diagnostic and `return`s from the enclosing
//!   function, which must return `()`.

#[doc(hidden)]
#[macro_export]
macro_rules! __cmp_op {
    (==) => {
        $crate::CmpOp::Eq
    };
    (!=) => {
        $crate::CmpOp::Ne
    };
    (<) => {
        $crate::CmpOp::Lt
    };
    (<=) => {
        $crate::CmpOp::Le
    };
    (>) => {
        $crate::CmpOp::Gt
    };
    (>=) => {
        $crate::CmpOp::Ge
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compare {
    ($fmt:literal, $expected:expr, $op:tt, $actual:expr) => {
        $crate::compare_with(
            $crate::location!(),
            concat!(
                stringify!($expected),
                " ",
                stringify!($op),
                " ",
                stringify!($actual)
            ),
            $crate::__cmp_op!($op),
            &$expected,
            &$actual,
            |value| format!($fmt, *value),
        )
    };
}

/// Asserts `expected <op> actual`, formatting values with `fmt`; exits on
/// failure.
///
/// The format replaces per-type variants: `"{}"` for integers, `"{:p}"` for
/// pointers, `"{:#x}"` for addresses, `"'{}'"` for characters.
///
/// ```rust,no_run
/// let base = 0x1000usize;
/// siphon_assert::v_assert_fmt!("{:#x}", base, <, 0x2000);
/// ```
#[macro_export]
macro_rules! v_assert_fmt {
    ($fmt:literal, $expected:expr, $op:tt, $actual:expr $(,)?) => {{
        let _ = $crate::__compare!($fmt, $expected, $op, $actual).enforce($crate::Policy::Fatal);
    }};
}

/// Like [`v_assert_fmt!`], but returns from the enclosing function on failure.
#[macro_export]
macro_rules! v_assert_fmt_pass {
    ($fmt:literal, $expected:expr, $op:tt, $actual:expr $(,)?) => {
        if $crate::__compare!($fmt, $expected, $op, $actual)
            .enforce($crate::Policy::Soft)
            .is_break()
        {
            return;
        }
    };
}

/// Asserts `expected <op> actual` using `Display`; exits on failure.
///
/// ```rust,no_run
/// siphon_assert::v_assert_cmp!(4, ==, 2 + 2);
/// ```
#[macro_export]
macro_rules! v_assert_cmp {
    ($expected:expr, $op:tt, $actual:expr $(,)?) => {
        $crate::v_assert_fmt!("{}", $expected, $op, $actual)
    };
}

/// Like [`v_assert_cmp!`], but returns from the enclosing function on failure.
#[macro_export]
macro_rules! v_assert_cmp_pass {
    ($expected:expr, $op:tt, $actual:expr $(,)?) => {
        $crate::v_assert_fmt_pass!("{}", $expected, $op, $actual)
    };
}

/// Asserts that a boolean expression holds; exits on failure.
#[macro_export]
macro_rules! v_assert {
    ($expression:expr $(,)?) => {{
        let _ = $crate::check($crate::location!(), stringify!($expression), $expression)
            .enforce($crate::Policy::Fatal);
    }};
}

/// Like [`v_assert!`], but returns from the enclosing function on failure.
#[macro_export]
macro_rules! v_assert_pass {
    ($expression:expr $(,)?) => {
        if $crate::check($crate::location!(), stringify!($expression), $expression)
            .enforce($crate::Policy::Soft)
            .is_break()
        {
            return;
        }
    };
}

/// Asserts that two strings are equal; exits on failure.
///
/// Accepts anything that is `AsRef<str>`.
#[macro_export]
macro_rules! v_assert_str {
    ($expected:expr, $actual:expr $(,)?) => {{
        let _ = $crate::check_str(
            $crate::location!(),
            ::core::convert::AsRef::<str>::as_ref(&$expected),
            ::core::convert::AsRef::<str>::as_ref(&$actual),
        )
        .enforce($crate::Policy::Fatal);
    }};
}

/// Like [`v_assert_str!`], but returns from the enclosing function on failure.
///
/// Prints the same `Strcmp >>>` / `Expected` / `Actual` block as the fatal
/// form, not a one-line `Expression >>> (Expected) .. != .. (Actual)` summary.
#[macro_export]
macro_rules! v_assert_str_pass {
    ($expected:expr, $actual:expr $(,)?) => {
        if $crate::check_str(
            $crate::location!(),
            ::core::convert::AsRef::<str>::as_ref(&$expected),
            ::core::convert::AsRef::<str>::as_ref(&$actual),
        )
        .enforce($crate::Policy::Soft)
        .is_break()
        {
            return;
        }
    };
}

/// Prints the success marker for the enclosing test function.
#[macro_export]
macro_rules! vts {
    () => {
        $crate::test_success($crate::function_name!())
    };
}

/// Prints the success marker for the enclosing suite function.
#[macro_export]
macro_rules! vss {
    () => {
        $crate::suite_success($crate::function_name!())
    };
}

#[cfg(test)]
mod tests {
    use crate::CmpOp;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(crate::__cmp_op!(==), CmpOp::Eq);
        assert_eq!(crate::__cmp_op!(!=), CmpOp::Ne);
        assert_eq!(crate::__cmp_op!(<), CmpOp::Lt);
        assert_eq!(crate::__cmp_op!(<=), CmpOp::Le);
        assert_eq!(crate::__cmp_op!(>), CmpOp::Gt);
        assert_eq!(crate::__cmp_op!(>=), CmpOp::Ge);
    }

    #[test]
    fn test_compare_macro_builds_expression_text() {
        let outcome = crate::__compare!("{}", 4, ==, 5);
        let failure = outcome.failure().unwrap();
        assert!(failure.to_string().contains("EXPRESSION\t>>> 4 == 5"));
        assert!(failure.to_string().contains("VALUES\t\t>>> 4 == 5"));
        assert_eq!(failure.location.function, "test_compare_macro_builds_expression_text");
    }

    #[test]
    fn test_compare_macro_passes() {
        assert!(crate::__compare!("{}", 4, ==, 2 + 2).is_pass());
    }

    #[test]
    fn test_compare_macro_pointer_format() {
        let value = 7u32;
        let other = 8u32;
        let a: *const u32 = &value;
        let b: *const u32 = &other;
        let outcome = crate::__compare!("{:p}", a, ==, b);
        let text = outcome.failure().unwrap().to_string();
        assert!(text.contains(&format!("{a:p} == {b:p}")));
    }

    #[test]
    fn test_passing_assertions_do_not_exit() {
        crate::v_assert_cmp!(4, ==, 2 + 2);
        crate::v_assert!(1 < 2);
        crate::v_assert_str!("abc", String::from("abc"));
        crate::v_assert_fmt!("{:#x}", 0x10u32, <, 0x20);
    }

    fn soft_stops_early(reached: &mut bool) {
        crate::v_assert_cmp_pass!(1, ==, 1);
        crate::v_assert_pass!(true);
        crate::v_assert_str_pass!("x", "x");
        *reached = true;
    }

    #[test]
    fn test_passing_soft_assertions_fall_through() {
        let mut reached = false;
        soft_stops_early(&mut reached);
        assert!(reached);
    }
}
