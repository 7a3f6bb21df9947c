use std::path::PathBuf;

use crate::probe::{Probe, ProbeError};
use crate::util::file_contains;

const MODULES_PATH: &str = "/proc/modules";

// Guest-integration module loaded only inside VirtualBox machines.
const VBOX_GUEST_MODULE: &str = "vboxguest";

/// Scans the loaded-module listing for the VirtualBox guest module.
#[derive(Debug, Clone)]
pub struct KernelModules {
    path: PathBuf,
}

impl KernelModules {
    /// Creates a probe reading the module listing at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for KernelModules {
    fn default() -> Self {
        Self::new(MODULES_PATH)
    }
}

impl Probe for KernelModules {
    fn label(&self) -> &'static str {
        "Kernel module (/proc/modules)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        Ok(file_contains(&self.path, VBOX_GUEST_MODULE)?)
    }
}
