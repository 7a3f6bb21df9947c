use std::path::PathBuf;

use crate::probe::{Probe, ProbeError};
use crate::util::path_exists;

// Present only when the kernel runs as a guest; contains the hypervisor name.
const HYPERVISOR_TYPE_PATH: &str = "/sys/hypervisor/type";

/// Checks for the hypervisor-type node under sysfs. Existence alone is the
/// positive signal.
#[derive(Debug, Clone)]
pub struct HypervisorType {
    path: PathBuf,
}

impl HypervisorType {
    /// Creates a probe checking for the node at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for HypervisorType {
    fn default() -> Self {
        Self::new(HYPERVISOR_TYPE_PATH)
    }
}

impl Probe for HypervisorType {
    fn label(&self) -> &'static str {
        "Hypervisor type (/sys/hypervisor/type)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        Ok(path_exists(&self.path))
    }
}
