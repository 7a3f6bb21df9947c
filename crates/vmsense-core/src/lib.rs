//! # vmsense Core
//!
//! `vmsense-core` is the foundational library for the vmsense virtual machine
//! detection toolkit. It decides whether the current process runs inside a
//! virtualized environment by evaluating an ordered set of independent,
//! best-effort probes against kernel pseudo-filesystems and firmware tables,
//! stopping at the first positive signal.
//!
//! ## Architecture Overview
//!
//! The library is built around a single trait that defines the interface for
//! each detection signal:
//!
//! - [`probe::Probe`] - Defines one independent check of an OS artifact
//!   (a `/proc` or `/sys` file, the kernel message device, a firmware
//!   device-tree node) for a known virtualization fingerprint.
//!
//! ## Main Components
//!
//! - [`Detector`] - The orchestrator that evaluates the CPUID common checks
//!   and the probe chain in a fixed priority order and produces a
//!   [`Detection`].
//!
//! - [`probes`] module - The built-in probe implementations: DMI table scan,
//!   kernel ring buffer, `/proc/sysinfo`, firmware device tree, hypervisor
//!   type, Xen, loaded kernel modules, and the CPU vendor string.
//!
//! - [`util`] module - Shared file primitives (substring-in-file and
//!   path-existence checks) and the deadline-bounded read used for character
//!   devices.
//!
//! ## Platform Support
//!
//! The probe set targets Linux systems exposing virtualization artifacts
//! through `/proc` and `/sys`. The CPUID common checks additionally require
//! an x86 or x86_64 CPU; on other architectures they report nothing. No
//! probe requires elevated privileges, but some artifacts are only readable
//! by root, so results are more reliable when running as root.

#![warn(missing_docs)]

mod common;
mod detector;
pub mod probe;
pub mod probes;
pub mod util;

pub use crate::common::common_checks;
pub use crate::detector::{Detection, Detector, is_running_in_virtual_machine};
