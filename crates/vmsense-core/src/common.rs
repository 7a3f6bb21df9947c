//! Cross-platform common checks, evaluated before the probe chain.
//!
//! These checks query the CPU itself instead of kernel-exposed files and are
//! shared across operating systems. On x86/x86_64 they inspect the CPUID
//! hypervisor vendor leaf and the hypervisor feature bit via the
//! `vmsense-cpuid` crate; on other architectures they report nothing.

/// Hypervisor vendor identification strings returned by CPUID leaf
/// `0x4000_0000`, with padding trimmed.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const KNOWN_CPUID_VENDORS: &[&str] = &[
    "KVMKVMKVM",
    "TCGTCGTCGTCG",
    "Microsoft Hv",
    "VMwareVMware",
    "XenVMMXenVMM",
    "prl hyperv",
    "VBoxVBoxVBox",
    "bhyve bhyve",
];

/// Runs the OS-independent checks, returning the reason of the first
/// positive one.
///
/// The hypervisor vendor string is consulted first because it yields the
/// more specific reason; the bare feature bit catches hypervisors that
/// advertise themselves without a recognized vendor leaf.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn common_checks() -> Option<&'static str> {
    if let Some(vendor) = vmsense_cpuid::hypervisor_vendor() {
        if KNOWN_CPUID_VENDORS.contains(&vendor.as_str()) {
            return Some("CPU Vendor Name (CPUID)");
        }
    }
    if vmsense_cpuid::hypervisor_bit() {
        return Some("Hypervisor bit (CPUID)");
    }
    None
}

/// Runs the OS-independent checks, returning the reason of the first
/// positive one.
///
/// CPUID is unavailable on this architecture, so there is nothing to check.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub fn common_checks() -> Option<&'static str> {
    None
}
