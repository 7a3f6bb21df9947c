//! # vmsense
//!
//! vmsense determines whether the current process runs inside a virtual
//! machine on Linux, and if so reports which signal gave it away. Detection
//! is an ordered chain of independent, best-effort probes over kernel
//! pseudo-filesystems, the kernel message device and firmware tables,
//! evaluated under a first-positive-wins policy.
//!
//! ## Quickstart guide
//!
//! ```no_run
//! let detection = vmsense::is_running_in_virtual_machine();
//! if detection.detected {
//!     println!("virtual machine detected: {}", detection.reason);
//! }
//! ```
//!
//! The `vmsense` binary in `vmsense-bin` wraps the same call behind a CLI
//! following the `systemd-detect-virt` exit-status convention. Use
//! `target/release/vmsense --help` to see available options.
//!
//! ## Modules
//!
//! - `probe`: The [`Probe`] trait implemented by every detection signal.
//! - `probes`: The built-in probe implementations.
//! - `util`: Shared file primitives and the deadline-bounded device read.
//!
//! On x86 targets the crate also re-exports the CPUID helpers as `cpuid`.

pub use vmsense_core::probe;
pub use vmsense_core::probes;
pub use vmsense_core::util;
pub use vmsense_core::{Detection, Detector, common_checks, is_running_in_virtual_machine};

pub use vmsense_core::probe::Probe;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use vmsense_cpuid as cpuid;
