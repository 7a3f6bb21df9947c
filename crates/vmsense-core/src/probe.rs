//! The probe trait implemented by every detection signal.
//!
//! A probe inspects exactly one OS artifact for a virtualization fingerprint.
//! Probes are stateless and idempotent: re-running a probe against an
//! unchanged system yields the same result. A probe never blocks for more
//! than a bounded amount of time and releases every handle it acquires on
//! all paths.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while a probe accesses its target artifact.
///
/// Probe errors are never fatal: the [`Detector`](crate::Detector) logs them
/// and treats the probe as negative.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// An I/O error occurred while opening or reading the artifact.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The artifact directory could not be enumerated.
    #[error("failed to list {path:?}: {source}")]
    ListDir {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Trait for detection signals checking one OS artifact each.
///
/// Implementors inspect a single piece of platform state (hardware identity
/// strings, kernel messages, module lists, firmware nodes) and report
/// whether a known virtualization fingerprint is present.
///
/// # Required Methods
///
/// * [`label()`](Probe::label) - Human-readable name of the inspected artifact
/// * [`check()`](Probe::check) - Runs the check
///
/// # Examples
///
/// See the [`probes`](crate::probes) module for the built-in implementations,
/// or the integration tests for mock probes driving the
/// [`Detector`](crate::Detector).
pub trait Probe {
    /// Returns the human-readable label identifying this signal.
    ///
    /// The label names the inspected artifact (for example
    /// `"DMI Table (/sys/class/dmi/id/*)"`) and becomes the reason string of
    /// a positive [`Detection`](crate::Detection).
    fn label(&self) -> &'static str;

    /// Inspects the artifact for a virtualization fingerprint.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the fingerprint was found, `Ok(false)` if not.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] if the artifact could not be accessed. The
    /// caller treats an error like a negative result; it never aborts the
    /// detection run.
    fn check(&self) -> Result<bool, ProbeError>;
}
