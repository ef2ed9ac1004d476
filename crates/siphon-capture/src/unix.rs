//! Unix implementation of descriptor capture.
//!
//! Uses `pipe(2)`, `dup(2)` and `dup2(2)` through `nix`, and `setvbuf(3)` /
//! `fflush(3)` through `libc` for the C stdio side of each stream.

use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use nix::errno::Errno;
use nix::unistd;

use crate::config::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::stream::Stream;

/// Descriptors held while a stream is redirected.
///
/// Dropping the channel closes all three descriptors exactly once.
#[derive(Debug)]
pub struct Channel {
    /// Duplicate of the stream's original destination.
    saved: OwnedFd,
    /// Pipe read end, drained by `read`.
    read_end: OwnedFd,
    /// Pipe write end, also installed as the stream's descriptor.
    write_end: OwnedFd,
}

impl Channel {
    /// Raw descriptors as `(saved, read_end, write_end)`.
    pub fn raw_fds(&self) -> (i32, i32, i32) {
        (
            self.saved.as_raw_fd(),
            self.read_end.as_raw_fd(),
            self.write_end.as_raw_fd(),
        )
    }
}

/// Redirect `stream` into a fresh pipe.
pub fn open(stream: Stream, config: CaptureConfig) -> CaptureResult<Channel> {
    // Anything buffered so far belongs to the original destination.
    if config.flush_std() {
        stream.flush_std();
    }
    stdio::flush(stream);

    if config.unbuffered() {
        stdio::set_mode(stream, libc::_IONBF);
    }

    install(stream).inspect_err(|_| {
        if config.restore_line_buffered() {
            stdio::set_mode(stream, libc::_IOLBF);
        }
    })
}

fn install(stream: Stream) -> CaptureResult<Channel> {
    let fd = stream.fd();

    let saved = unistd::dup(fd).map_err(|errno| CaptureError::Duplicate { stream, errno })?;
    // SAFETY: `dup` just returned this descriptor; nothing else owns it.
    let saved = unsafe { OwnedFd::from_raw_fd(saved) };

    let (read_end, write_end) =
        unistd::pipe().map_err(|errno| CaptureError::Pipe { stream, errno })?;

    // dup2 closes whatever `fd` referenced before, atomically.
    unistd::dup2(write_end.as_raw_fd(), fd)
        .map_err(|errno| CaptureError::Install { stream, errno })?;

    Ok(Channel {
        saved,
        read_end,
        write_end,
    })
}

/// Drain whatever is queued in the pipe into `buf`.
///
/// Blocks until at least one byte is available or every write end is closed.
pub fn read(channel: &Channel, stream: Stream, buf: &mut [u8]) -> CaptureResult<usize> {
    loop {
        match unistd::read(channel.read_end.as_raw_fd(), buf) {
            Ok(n) => return Ok(n),
            Err(Errno::EINTR) => {}
            Err(errno) => return Err(CaptureError::Read { stream, errno }),
        }
    }
}

/// Put the original destination back onto the stream's descriptor.
///
/// The channel stays intact on failure, so the caller can keep it and retry.
pub fn restore(channel: &Channel, stream: Stream, config: CaptureConfig) -> CaptureResult<()> {
    if config.flush_std() {
        stream.flush_std();
    }
    stdio::flush(stream);

    unistd::dup2(channel.saved.as_raw_fd(), stream.fd())
        .map_err(|errno| CaptureError::Restore { stream, errno })?;
    Ok(())
}

/// Close the channel's descriptors after a successful restore.
pub fn release(channel: Channel, stream: Stream, config: CaptureConfig) {
    drop(channel);

    if config.restore_line_buffered() {
        stdio::set_mode(stream, libc::_IOLBF);
    }
}

/// Number of descriptors currently open in this process.
pub fn open_descriptor_count() -> usize {
    #[cfg(target_os = "linux")]
    const FD_DIR: &str = "/proc/self/fd";
    #[cfg(not(target_os = "linux"))]
    const FD_DIR: &str = "/dev/fd";

    // The listing includes the directory handle used to produce it.
    std::fs::read_dir(FD_DIR)
        .map(|entries| entries.count().saturating_sub(1))
        .unwrap_or(0)
}

/// The C library's `FILE *` side of the standard streams.
mod stdio {
    use crate::stream::Stream;

    #[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly"))]
    unsafe extern "C" {
        #[link_name = "__stdoutp"]
        static C_STDOUT: *mut libc::FILE;
        #[link_name = "__stderrp"]
        static C_STDERR: *mut libc::FILE;
    }

    #[cfg(not(any(target_vendor = "apple", target_os = "freebsd", target_os = "dragonfly")))]
    unsafe extern "C" {
        #[link_name = "stdout"]
        static C_STDOUT: *mut libc::FILE;
        #[link_name = "stderr"]
        static C_STDERR: *mut libc::FILE;
    }

    fn handle(stream: Stream) -> *mut libc::FILE {
        // SAFETY: the C runtime initializes these before `main` and never
        // reassigns them; we only copy the pointer value.
        unsafe {
            match stream {
                Stream::Stdout => C_STDOUT,
                Stream::Stderr => C_STDERR,
            }
        }
    }

    pub fn flush(stream: Stream) {
        let file = handle(stream);
        if file.is_null() {
            return;
        }
        // SAFETY: `file` is the live C stdio handle for this stream.
        if unsafe { libc::fflush(file) } != 0 {
            tracing::trace!(%stream, "fflush failed");
        }
    }

    pub fn set_mode(stream: Stream, mode: libc::c_int) {
        let file = handle(stream);
        if file.is_null() {
            return;
        }
        // SAFETY: a null buffer lets libc manage storage; `mode` is one of
        // the `_IO*BF` constants.
        let rc = unsafe { libc::setvbuf(file, std::ptr::null_mut(), mode, 0) };
        if rc != 0 {
            tracing::warn!(%stream, mode, "setvbuf failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_descriptor_count_is_positive() {
        // stdin/stdout/stderr at least
        assert!(open_descriptor_count() >= 3);
    }
}
