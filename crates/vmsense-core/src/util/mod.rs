//! Shared file primitives used by the probes.
//!
//! This module provides the two helpers every marker-scanning probe is built
//! on ([`file_contains`] and [`path_exists`]) plus the deadline-bounded read
//! ([`read_contains_deadline`]) required for live character devices such as
//! `/dev/kmsg`.

mod deadline;
mod fs;

pub use self::deadline::read_contains_deadline;
pub use self::fs::{contains_bytes, file_contains, path_exists, reader_contains};
