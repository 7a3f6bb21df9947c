use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use crate::util::contains_bytes;

const CHUNK_SIZE: usize = 8192;

/// Scans a stream for `needle`, giving up once `deadline` has elapsed.
///
/// The file must have been opened with `O_NONBLOCK`; availability of data is
/// awaited with `poll(2)` using the remaining time budget, so a live
/// character device such as `/dev/kmsg` can never block the caller past the
/// deadline. Regular files are always readable and are scanned to EOF.
///
/// A timed-out read and a stream that ends without a match both yield
/// `Ok(false)`; the two cases are deliberately not distinguished.
///
/// # Errors
///
/// Returns an I/O error if `poll(2)` or a read fails for a reason other
/// than `EAGAIN`, `EINTR` or `EPIPE` (`EPIPE` signals an overwritten kernel
/// log record and the scan continues with the next one).
pub fn read_contains_deadline(
    file: &File,
    needle: &str,
    deadline: Duration,
) -> io::Result<bool> {
    let needle = needle.as_bytes();
    let start = Instant::now();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut window: Vec<u8> = Vec::new();

    loop {
        let remaining = deadline.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            return Ok(false);
        }
        if !wait_readable(file, remaining)? {
            return Ok(false);
        }

        match (&*file).read(&mut buf) {
            Ok(0) => return Ok(false),
            Ok(nbytes) => {
                window.extend_from_slice(&buf[..nbytes]);
                if contains_bytes(&window, needle) {
                    return Ok(true);
                }
                let keep = needle.len().saturating_sub(1).min(window.len());
                window.drain(..window.len() - keep);
            }
            // Drained for now; poll again for more data within the budget.
            Err(e) if e.kind() == ErrorKind::WouldBlock => {}
            // The record under the read position was overwritten.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Waits until the file has data to read or the timeout expires.
///
/// Returns `Ok(false)` on timeout.
fn wait_readable(file: &File, timeout: Duration) -> io::Result<bool> {
    let mut pollfd = libc::pollfd {
        fd: file.as_raw_fd(),
        events: libc::POLLIN,
        revents: 0,
    };
    let timeout_ms = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;
    loop {
        let ret = unsafe { libc::poll(&mut pollfd, 1, timeout_ms) };
        match ret {
            0 => return Ok(false),
            n if n > 0 => return Ok(true),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() != ErrorKind::Interrupted {
                    return Err(err);
                }
            }
        }
    }
}
