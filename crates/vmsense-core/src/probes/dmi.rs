use std::path::PathBuf;

use log::error;

use crate::probe::{Probe, ProbeError};
use crate::util::contains_bytes;

const DMI_PATH: &str = "/sys/class/dmi/id/";

// All entries must be lowercase; file content is folded before matching.
const DMI_BLACKLIST: &[&str] = &[
    "innotek",
    "virtualbox",
    "vbox",
    "kvm",
    "qemu",
    "vmware",
    "vmw",
    "oracle",
    "xen",
    "bochs",
    "parallels",
    "bhyve",
];

/// Scans the DMI/SMBIOS hardware identity files for known VM vendor strings.
///
/// Virtualization platforms stamp their identity into BIOS, board and
/// manufacturer fields under `/sys/class/dmi/id/`. Every regular file in the
/// directory is read, lowercased and matched against a curated blacklist of
/// vendor substrings, so capitalization drift in vendor strings cannot cause
/// a miss.
#[derive(Debug, Clone)]
pub struct DmiTable {
    root: PathBuf,
}

impl DmiTable {
    /// Creates a probe scanning the directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for DmiTable {
    fn default() -> Self {
        Self::new(DMI_PATH)
    }
}

impl Probe for DmiTable {
    fn label(&self) -> &'static str {
        "DMI Table (/sys/class/dmi/id/*)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| ProbeError::ListDir {
            path: self.root.clone(),
            source,
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("skipping unreadable DMI entry: {e}");
                    continue;
                }
            };
            let is_regular = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_regular {
                continue;
            }
            let content = match std::fs::read(entry.path()) {
                Ok(content) => content,
                Err(e) => {
                    error!("failed to read {}: {e}", entry.path().display());
                    continue;
                }
            };
            let content = content.to_ascii_lowercase();
            if DMI_BLACKLIST
                .iter()
                .any(|vendor| contains_bytes(&content, vendor.as_bytes()))
            {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
