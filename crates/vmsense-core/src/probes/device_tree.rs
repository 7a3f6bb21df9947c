use std::path::PathBuf;

use crate::probe::{Probe, ProbeError};
use crate::util::path_exists;

const DEVICE_TREE_PATH: &str = "/proc/device-tree";

// Either node is stamped into the device tree by the hypervisor: a
// hypervisor-compatibility descriptor, or a QEMU fw_cfg interface node.
const HYPERVISOR_NODE: &str = "hypervisor/compatible";
const FW_CFG_NODE: &str = "fw-cfg";

/// Checks the firmware device tree for hypervisor nodes.
///
/// Pure existence check; no content is inspected, and any access error is
/// treated identically to non-existence.
#[derive(Debug, Clone)]
pub struct DeviceTree {
    base: PathBuf,
}

impl DeviceTree {
    /// Creates a probe checking below the device-tree base at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for DeviceTree {
    fn default() -> Self {
        Self::new(DEVICE_TREE_PATH)
    }
}

impl Probe for DeviceTree {
    fn label(&self) -> &'static str {
        "VM device tree (/proc/device-tree)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        Ok(path_exists(self.base.join(HYPERVISOR_NODE)) || path_exists(self.base.join(FW_CFG_NODE)))
    }
}
