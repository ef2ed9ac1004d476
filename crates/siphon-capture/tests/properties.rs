//! Property checks for capture round-trips and truncation.
//!
//! Runs without libtest for the same reason as `lifecycle`: the properties
//! redirect descriptors 1 and 2 of this process.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};
use siphon_capture::{Stream, StreamCapture, open_descriptor_count};

/// Stays well below the smallest common pipe buffer (4 KiB).
const MAX_PAYLOAD: usize = 2048;

fn runner() -> TestRunner {
    TestRunner::new(Config {
        cases: 128,
        failure_persistence: None,
        ..Config::default()
    })
}

fn emit(stream: Stream, bytes: &[u8]) {
    match stream {
        Stream::Stdout => std::io::stdout().write_all(bytes).unwrap(),
        Stream::Stderr => std::io::stderr().write_all(bytes).unwrap(),
    }
}

/// Setup, write, one read into `capacity` bytes, teardown.
fn capture_once(stream: Stream, payload: &[u8], capacity: usize) -> (Vec<u8>, usize) {
    let mut capture = StreamCapture::new(stream);
    let mut buf = vec![0xFFu8; capacity];
    capture.setup().unwrap();
    emit(stream, payload);
    let n = capture.read(&mut buf).unwrap();
    capture.teardown().unwrap();
    (buf, n)
}

fn main() {
    let before = open_descriptor_count();

    // Non-empty: reading an empty pipe would block.
    let payloads = vec(1u8..=255, 1..MAX_PAYLOAD);

    for stream in [Stream::Stdout, Stream::Stderr] {
        runner()
            .run(&payloads, |payload| {
                let (buf, n) = capture_once(stream, &payload, MAX_PAYLOAD + 1);
                prop_assert_eq!(n, payload.len());
                prop_assert_eq!(&buf[..n], &payload[..]);
                prop_assert_eq!(buf[n], 0);
                Ok(())
            })
            .unwrap();
        println!("round_trip_{stream} ✓");
    }

    let truncation = (1usize..64).prop_flat_map(|capacity| {
        (Just(capacity), vec(1u8..=255, capacity..capacity + 256))
    });
    runner()
        .run(&truncation, |(capacity, payload)| {
            let (buf, n) = capture_once(Stream::Stdout, &payload, capacity);
            prop_assert_eq!(n, capacity - 1);
            prop_assert_eq!(&buf[..n], &payload[..n]);
            prop_assert_eq!(buf[n], 0);
            prop_assert_eq!(buf.len(), capacity);
            Ok(())
        })
        .unwrap();
    println!("truncation_boundary ✓");

    assert_eq!(open_descriptor_count(), before);
    println!("no_descriptor_leak ✓");
    println!("---> Suite properties ✓\n");
}
