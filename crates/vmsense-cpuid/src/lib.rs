//! CPUID hypervisor checks for vmsense.
//!
//! This crate wraps the two CPU-level virtualization signals: the hypervisor
//! feature bit (leaf 1, ECX bit 31), which is always clear on physical CPUs,
//! and the hypervisor vendor identification string (leaf `0x4000_0000`),
//! which hypervisors use to announce themselves to guests.
//!
//! # Platform Requirements
//!
//! - x86 or x86_64 CPU; consumers gate this crate behind a target
//!   configuration and report nothing on other architectures

#![warn(missing_docs)]

use log::debug;
use raw_cpuid::CpuId;

// Hypervisor information leaf, reserved range 0x4000_0000-0x4000_00FF.
const HYPERVISOR_LEAF: u32 = 0x4000_0000;

/// Returns `true` if the CPUID hypervisor feature bit is set.
///
/// The bit (leaf 1, ECX bit 31) is reserved as always-zero on physical
/// hardware and set by hypervisors, so it is a direct virtualization signal.
pub fn hypervisor_bit() -> bool {
    CpuId::new()
        .get_feature_info()
        .is_some_and(|features| features.has_hypervisor())
}

/// Reads the hypervisor vendor identification string.
///
/// Queries leaf `0x4000_0000` and assembles the 12-byte vendor id from EBX,
/// ECX and EDX, trimming NUL and whitespace padding. Returns `None` when the
/// hypervisor bit is unset (the leaf carries no meaning then) or when the
/// assembled string is empty.
pub fn hypervisor_vendor() -> Option<String> {
    if !hypervisor_bit() {
        return None;
    }

    let result = raw_cpuid::cpuid!(HYPERVISOR_LEAF);
    let mut bytes = Vec::with_capacity(12);
    for register in [result.ebx, result.ecx, result.edx] {
        bytes.extend_from_slice(&register.to_le_bytes());
    }
    let vendor = String::from_utf8_lossy(&bytes);
    let vendor = vendor.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    debug!("cpuid hypervisor vendor: {vendor:?}");
    if vendor.is_empty() {
        None
    } else {
        Some(vendor.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{hypervisor_bit, hypervisor_vendor};

    // Runs on whatever the test host is; only the internal consistency of
    // the two signals can be asserted.
    #[test]
    fn test_vendor_implies_bit() {
        if hypervisor_vendor().is_some() {
            assert!(hypervisor_bit());
        }
    }
}
