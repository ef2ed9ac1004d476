// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Capture Example
//!
//! Captures what a noisy function prints, asserts on it, and shows the
//! success markers.
//!
//! # Usage
//!
//! ```bash
//! # Run the demo suite
//! cargo run --example capture
//!
//! # Show capture lifecycle events
//! RUST_LOG=siphon_capture=debug cargo run --example capture
//!
//! # End with a fatal assertion (exit status 1)
//! cargo run --example capture -- --fatal
//! ```

use std::fs::File;
use std::io::Write;
use std::os::fd::AsFd;
use std::sync::Mutex;

use siphon::prelude::*;

/// Stand-in for code under test that reports through stdout and stderr.
fn greet(name: &str) {
    println!("hello, {name}");
    eprint!("greeted {name}");
}

fn test_greet_stdout() {
    let mut out = StreamCapture::stdout();
    out.setup().expect("stdout capture");
    greet("world");
    let printed = out.read_string(256).expect("read stdout");
    out.teardown().expect("restore stdout");

    v_assert_str_pass!("hello, world\n", printed);
    vts!();
}

fn test_greet_stderr() {
    let mut err = StreamCapture::stderr();
    err.setup().expect("stderr capture");
    greet("stderr");
    let printed = err.read_string(256).expect("read stderr");
    err.teardown().expect("restore stderr");

    // greet's stdout line went to the terminal, untouched.
    v_assert_str_pass!("greeted stderr", printed);
    vts!();
}

fn test_truncation() {
    let mut out = StreamCapture::stdout();
    out.setup().expect("stdout capture");
    std::io::stdout().write_all(b"0123456789").unwrap();
    let mut buf = [0u8; 5];
    let n = out.read(&mut buf).expect("read stdout");
    out.teardown().expect("restore stdout");

    v_assert_cmp_pass!(n, ==, 4);
    v_assert_cmp_pass!(buf[4], ==, 0);
    v_assert_str_pass!("0123", String::from_utf8_lossy(&buf[..n]));
    vts!();
}

fn test_no_leak() {
    let before = open_descriptor_count();
    let mut out = StreamCapture::stdout();
    for _ in 0..100 {
        out.setup().expect("stdout capture");
        out.teardown().expect("restore stdout");
    }
    v_assert_cmp_pass!(open_descriptor_count(), ==, before);
    vts!();
}

fn test_soft_failure() {
    // Reported, then this test returns; the suite keeps going.
    v_assert_cmp_pass!(4, ==, 5);
    vts!();
}

fn suite_capture() {
    test_greet_stdout();
    test_greet_stderr();
    test_truncation();
    test_no_leak();
    test_soft_failure();
    vss!();
}

fn main() {
    // Log to a duplicate of the terminal's stderr. Capturing redirects fd 2
    // only, so log lines never land in test_greet_stderr's pipe.
    let log = std::io::stderr()
        .as_fd()
        .try_clone_to_owned()
        .expect("duplicate stderr for logging");
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(File::from(log)))
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let fatal = std::env::args().any(|a| a == "--fatal");

    suite_capture();

    if fatal {
        tracing::info!("ending with a fatal assertion");
        v_assert_cmp!(2 + 2, ==, 5);
    }

    full_success("siphon demo");
}
