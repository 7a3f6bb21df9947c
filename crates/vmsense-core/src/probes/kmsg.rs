use std::fs::File;
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;
use std::time::Duration;

use crate::probe::{Probe, ProbeError};
use crate::util::read_contains_deadline;

const KMSG_PATH: &str = "/dev/kmsg";

// Logged by the kernel's CPU initialization when it finds a hypervisor:
// https://github.com/torvalds/linux/blob/31cc088a4f5d83481c6f5041bd6eb06115b974af/arch/x86/kernel/cpu/hypervisor.c#L79
const HYPERVISOR_MARKER: &str = "Hypervisor detected";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Scans the kernel ring buffer for the hypervisor-detection message.
///
/// `/dev/kmsg` is a live character device: a blocking read would never
/// return once the buffered records are drained. The device is therefore
/// opened with `O_NONBLOCK` and scanned under a read deadline, after which
/// the probe reports a negative result. A timed-out read is not
/// distinguished from a buffer without the marker.
#[derive(Debug, Clone)]
pub struct KernelRingBuffer {
    path: PathBuf,
    timeout: Duration,
}

impl KernelRingBuffer {
    /// Creates a probe reading from `path` with the given deadline.
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }
}

impl Default for KernelRingBuffer {
    fn default() -> Self {
        Self::new(KMSG_PATH, DEFAULT_TIMEOUT)
    }
}

impl Probe for KernelRingBuffer {
    fn label(&self) -> &'static str {
        "Kernel Ring Buffer (/dev/kmsg)"
    }

    fn check(&self) -> Result<bool, ProbeError> {
        let file = File::options()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&self.path)?;
        Ok(read_contains_deadline(&file, HYPERVISOR_MARKER, self.timeout)?)
    }
}
