//! Siphon: Minimal Native Unit-Testing Harness
//!
//! Assertion primitives plus capture of the process stdout/stderr streams.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use siphon::prelude::*;
//! use std::io::Write;
//!
//! fn test_greeting() {
//!     let mut out = StreamCapture::stdout();
//!     out.setup().unwrap();
//!     std::io::stdout().write_all(b"hello\n").unwrap();
//!     let printed = out.read_string(64).unwrap();
//!     out.teardown().unwrap();
//!
//!     v_assert_str_pass!("hello\n", printed);
//!     vts!();
//! }
//! # test_greeting();
//! ```

pub use siphon_assert as assert;
pub use siphon_capture as capture;

/// Prelude module for common imports.
pub mod prelude {
    pub use siphon_assert::{
        CmpOp, EXIT_ASSERTION_FAILED, Location, Outcome, Policy, full_success, suite_success,
        test_success, v_assert, v_assert_cmp, v_assert_cmp_pass, v_assert_fmt, v_assert_fmt_pass,
        v_assert_pass, v_assert_str, v_assert_str_pass, vss, vts,
    };
    pub use siphon_capture::{
        CaptureConfig, CaptureError, CaptureState, Stream, StreamCapture, open_descriptor_count,
    };
}
