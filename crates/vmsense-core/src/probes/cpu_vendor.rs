use std::path::PathBuf;

use crate::probe::{Probe, ProbeError};
use crate::util::file_contains;

const CPUINFO_PATH: &str = "/proc/cpuinfo";

// vendor_id reported by a User Mode Linux guest kernel.
const UML_VENDOR: &str = "User Mode Linux";

/// Scans `/proc/cpuinfo` for the User Mode Linux vendor string.
#[derive(Debug, Clone)]
pub struct CpuVendor {
    path: PathBuf,
}

impl CpuVendor {
    /// Creates a probe reading the CPU information file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for CpuVendor {
    fn default() -> Self {
        Self::new(CPUINFO_PATH)
    }
}

impl Probe for CpuVendor {
    fn label(&self) -> &'static str {
        "CPU Vendor (/proc/cpuinfo)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        Ok(file_contains(&self.path, UML_VENDOR)?)
    }
}
