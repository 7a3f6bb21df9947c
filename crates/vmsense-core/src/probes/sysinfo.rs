use std::path::PathBuf;

use crate::probe::{Probe, ProbeError};
use crate::util::file_contains;

const SYSINFO_PATH: &str = "/proc/sysinfo";

// "VM00" names the first logical partition in /proc/sysinfo, exposed by
// s390x kernels running under z/VM or KVM.
const VM_MARKER: &str = "VM00";

/// Scans `/proc/sysinfo` for a logical-partition marker.
///
/// The file only exists on kernel builds for architectures with logical
/// partitioning; its absence is the common case and is reported as an error
/// for the orchestrator to downgrade.
#[derive(Debug, Clone)]
pub struct SysInfo {
    path: PathBuf,
}

impl SysInfo {
    /// Creates a probe reading the system-information file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for SysInfo {
    fn default() -> Self {
        Self::new(SYSINFO_PATH)
    }
}

impl Probe for SysInfo {
    fn label(&self) -> &'static str {
        "System Information (/proc/sysinfo)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        Ok(file_contains(&self.path, VM_MARKER)?)
    }
}

#[cfg(test)]
mod tests {
    use super::SysInfo;
    use crate::probe::Probe;
    use std::fs;

    #[test]
    fn test_partition_marker_present() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sysinfo");
        fs::write(&path, "VM00 Name: LINUX01\nVM00 Control Program: KVM/Linux\n")?;
        assert!(SysInfo::new(&path).check()?);
        Ok(())
    }

    #[test]
    fn test_bare_metal_sysinfo() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sysinfo");
        fs::write(&path, "Manufacturer: IBM\nType: 8561\n")?;
        assert!(!SysInfo::new(&path).check()?);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(SysInfo::new("/nonexistent/sysinfo").check().is_err());
    }
}
