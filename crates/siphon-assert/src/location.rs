//! Source locations for failure reports.

use std::fmt;

/// Where an assertion was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Source file path, as given by `file!()`.
    pub file: &'static str,
    /// Line number, as given by `line!()`.
    pub line: u32,
    /// Name of the enclosing function.
    pub function: &'static str,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FILE({}) | LINE({}) | FUNCTION({})",
            self.file, self.line, self.function
        )
    }
}

/// Reduces the type name of a probe item nested in a function to the
/// function's own name.
///
/// `my_crate::suite::test_sum::{{closure}}::__probe` becomes `test_sum`.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(probe_type_name: &'static str) -> &'static str {
    let path = probe_type_name
        .strip_suffix("::__probe")
        .unwrap_or(probe_type_name);
    let path = path.trim_end_matches("::{{closure}}");
    path.rsplit("::").next().unwrap_or(path)
}

/// Expands to the name of the enclosing function as a `&'static str`.
///
/// ```rust
/// fn checks_parser() -> &'static str {
///     siphon_assert::function_name!()
/// }
/// assert_eq!(checks_parser(), "checks_parser");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __probe() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::location::short_function_name(__type_name_of(__probe))
    }};
}

/// Expands to the [`Location`] of the macro call site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), $crate::function_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_function_name() {
        assert_eq!(short_function_name("a::b::run::__probe"), "run");
        assert_eq!(
            short_function_name("a::suite::run::{{closure}}::__probe"),
            "run"
        );
        assert_eq!(short_function_name("main::__probe"), "main");
        assert_eq!(short_function_name("bare"), "bare");
    }

    #[test]
    fn test_function_name_macro() {
        assert_eq!(crate::function_name!(), "test_function_name_macro");
    }

    #[test]
    fn test_function_name_inside_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "test_function_name_inside_closure");
    }

    #[test]
    fn test_location_macro() {
        let loc = crate::location!();
        assert!(loc.file.ends_with("location.rs"));
        assert!(loc.line > 0);
        assert_eq!(loc.function, "test_location_macro");
    }

    #[test]
    fn test_display() {
        let loc = Location::new("src/sum.rs", 12, "test_sum");
        assert_eq!(
            loc.to_string(),
            "FILE(src/sum.rs) | LINE(12) | FUNCTION(test_sum)"
        );
    }
}
