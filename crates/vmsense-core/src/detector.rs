use log::{debug, error, warn};
use serde::Serialize;

use crate::common::common_checks;
use crate::probe::Probe;
use crate::probes::{
    CpuVendor, DeviceTree, DmiTable, HypervisorType, KernelModules, KernelRingBuffer, SysInfo,
    XenProcFile,
};

/// Reason string reported when no signal fired.
const NOTHING: &str = "nothing";

/// Outcome of a detection run.
///
/// When `detected` is `false` the reason is always the fixed sentinel
/// `"nothing"`; when `true` the reason uniquely identifies the signal that
/// fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Whether a virtualized environment was detected.
    pub detected: bool,
    /// Which signal fired, or `"nothing"`.
    pub reason: String,
}

impl Detection {
    /// A positive result attributed to the given signal.
    pub fn positive(reason: impl Into<String>) -> Self {
        Self {
            detected: true,
            reason: reason.into(),
        }
    }

    /// The negative result with the `"nothing"` sentinel reason.
    pub fn negative() -> Self {
        Self {
            detected: false,
            reason: NOTHING.to_string(),
        }
    }
}

/// Orchestrates the detection signals under a first-positive-wins policy.
///
/// The detector evaluates the CPUID common checks first and then a fixed,
/// ordered probe chain, short-circuiting on the first positive signal. No
/// probe failure is fatal: each failure is logged and degrades to a negative
/// result for that probe, so a detection run always completes.
///
/// # Examples
///
/// Use [`Detector::new()`] for the standard probe order, or
/// [`Detector::with_probes()`] to supply a custom chain (the entry point for
/// tests with mock probes or synthetic filesystem trees).
pub struct Detector {
    common_checks: bool,
    probes: Vec<Box<dyn Probe>>,
}

impl Detector {
    /// Creates a detector with the standard probe chain.
    pub fn new() -> Self {
        Self {
            common_checks: true,
            probes: standard_probes(),
        }
    }

    /// Creates a detector with a custom probe chain, evaluated in order.
    pub fn with_probes(probes: Vec<Box<dyn Probe>>) -> Self {
        Self {
            common_checks: true,
            probes,
        }
    }

    /// Enables or disables the CPUID common checks.
    ///
    /// Disabling them is useful when driving the probe chain against
    /// synthetic filesystem trees on a host that itself runs virtualized.
    pub fn common_checks(mut self, enabled: bool) -> Self {
        self.common_checks = enabled;
        self
    }

    /// Runs the detection and returns the outcome.
    ///
    /// Emits an advisory warning when running unprivileged, since some
    /// artifacts are only readable by root; execution continues regardless.
    pub fn detect(&self) -> Detection {
        if !running_as_root() {
            warn!("unprivileged user detected, some checks might not work");
        }

        if self.common_checks {
            if let Some(reason) = common_checks() {
                return Detection::positive(reason);
            }
        }

        for probe in &self.probes {
            match probe.check() {
                Ok(true) => return Detection::positive(probe.label()),
                Ok(false) => debug!("{}: negative", probe.label()),
                Err(e) => error!("{}: {e}", probe.label()),
            }
        }

        Detection::negative()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if a virtual machine is detected, along with the signal
/// that gave it away.
///
/// Equivalent to running [`Detector::new()`] once; all state is read fresh
/// from the operating system on each call.
pub fn is_running_in_virtual_machine() -> Detection {
    Detector::new().detect()
}

/// The standard probe chain, cheapest and most reliable signals first.
fn standard_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(KernelModules::default()),
        Box::new(CpuVendor::default()),
        Box::new(SysInfo::default()),
        Box::new(DmiTable::default()),
        Box::new(KernelRingBuffer::default()),
        Box::new(DeviceTree::default()),
        Box::new(HypervisorType::default()),
        Box::new(XenProcFile::default()),
    ]
}

fn running_as_root() -> bool {
    // geteuid can never fail.
    unsafe { libc::geteuid() == 0 }
}
