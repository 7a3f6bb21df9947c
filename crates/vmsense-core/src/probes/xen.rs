use std::path::PathBuf;

use crate::probe::{Probe, ProbeError};
use crate::util::path_exists;

// Populated by the xenfs pseudo-filesystem inside Xen guests only.
const XEN_PATH: &str = "/proc/xen";

/// Checks for the Xen-only proc directory. Existence alone is the positive
/// signal.
#[derive(Debug, Clone)]
pub struct XenProcFile {
    path: PathBuf,
}

impl XenProcFile {
    /// Creates a probe checking for the directory at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for XenProcFile {
    fn default() -> Self {
        Self::new(XEN_PATH)
    }
}

impl Probe for XenProcFile {
    fn label(&self) -> &'static str {
        "Xen proc file (/proc/xen)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        Ok(path_exists(&self.path))
    }
}
