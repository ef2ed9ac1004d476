//! Unsupported platform implementation.
//!
//! Setup always fails with `CaptureError::Unsupported`, so a channel can
//! never exist.

use crate::config::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::stream::Stream;

/// Uninhabited: no descriptor redirection on this platform.
#[derive(Debug)]
pub enum Channel {}

impl Channel {
    pub fn raw_fds(&self) -> (i32, i32, i32) {
        match *self {}
    }
}

pub fn open(_stream: Stream, _config: CaptureConfig) -> CaptureResult<Channel> {
    Err(CaptureError::Unsupported)
}

pub fn read(channel: &Channel, _stream: Stream, _buf: &mut [u8]) -> CaptureResult<usize> {
    match *channel {}
}

pub fn restore(channel: &Channel, _stream: Stream, _config: CaptureConfig) -> CaptureResult<()> {
    match *channel {}
}

pub fn release(channel: Channel, _stream: Stream, _config: CaptureConfig) {
    match channel {}
}

pub fn open_descriptor_count() -> usize {
    0
}
