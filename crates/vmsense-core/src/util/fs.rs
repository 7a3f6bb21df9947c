use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

// Streaming reads scan one chunk at a time. The tail of the previous chunk
// is kept so a marker spanning a chunk boundary is still found.
const CHUNK_SIZE: usize = 8192;

/// Returns `true` if `needle` occurs anywhere in `haystack`.
///
/// An empty needle matches everything.
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Returns `true` if `needle` occurs anywhere in the stream's content.
///
/// The stream is consumed in fixed-size chunks, so arbitrarily large files
/// are scanned without loading them into memory.
///
/// # Errors
///
/// Returns an I/O error if reading the stream fails.
pub fn reader_contains<R: Read>(mut reader: R, needle: &str) -> io::Result<bool> {
    let needle = needle.as_bytes();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut window: Vec<u8> = Vec::new();
    loop {
        let nbytes = reader.read(&mut buf)?;
        if nbytes == 0 {
            return Ok(false);
        }
        window.extend_from_slice(&buf[..nbytes]);
        if contains_bytes(&window, needle) {
            return Ok(true);
        }
        let keep = needle.len().saturating_sub(1).min(window.len());
        window.drain(..window.len() - keep);
    }
}

/// Returns `true` if the file at `path` contains `needle`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn file_contains<P: AsRef<Path>>(path: P, needle: &str) -> io::Result<bool> {
    let file = File::open(path)?;
    reader_contains(file, needle)
}

/// Returns `true` if `path` exists and is accessible.
///
/// Any access error is treated identically to non-existence.
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
