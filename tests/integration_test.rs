use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use anyhow::Result;
use vmsense::probe::{Probe, ProbeError};
use vmsense::probes::{
    CpuVendor, DeviceTree, DmiTable, HypervisorType, KernelModules, KernelRingBuffer, SysInfo,
    XenProcFile,
};
use vmsense::{Detection, Detector};

/// Mock probe with a fixed outcome.
struct StaticProbe {
    label: &'static str,
    outcome: Result<bool, ErrorKind>,
}

impl StaticProbe {
    fn positive(label: &'static str) -> Box<Self> {
        Box::new(Self {
            label,
            outcome: Ok(true),
        })
    }

    fn negative(label: &'static str) -> Box<Self> {
        Box::new(Self {
            label,
            outcome: Ok(false),
        })
    }

    fn failing(label: &'static str, kind: ErrorKind) -> Box<Self> {
        Box::new(Self {
            label,
            outcome: Err(kind),
        })
    }
}

impl Probe for StaticProbe {
    fn label(&self) -> &'static str {
        self.label
    }

    fn check(&self) -> Result<bool, ProbeError> {
        match self.outcome {
            Ok(found) => Ok(found),
            Err(kind) => Err(ProbeError::Io(kind.into())),
        }
    }
}

/// The detector's probe chain pointed at a synthetic filesystem tree, in
/// the standard order.
fn synthetic_detector(root: &std::path::Path) -> Detector {
    Detector::with_probes(vec![
        Box::new(KernelModules::new(root.join("modules"))),
        Box::new(CpuVendor::new(root.join("cpuinfo"))),
        Box::new(SysInfo::new(root.join("sysinfo"))),
        Box::new(DmiTable::new(root.join("dmi"))),
        Box::new(KernelRingBuffer::new(
            root.join("kmsg"),
            Duration::from_millis(200),
        )),
        Box::new(DeviceTree::new(root.join("device-tree"))),
        Box::new(HypervisorType::new(root.join("hypervisor_type"))),
        Box::new(XenProcFile::new(root.join("xen"))),
    ])
    .common_checks(false)
}

#[test]
fn test_first_positive_wins() {
    let detector = Detector::with_probes(vec![
        StaticProbe::negative("first"),
        StaticProbe::positive("second"),
        StaticProbe::positive("third"),
    ])
    .common_checks(false);

    assert_eq!(detector.detect(), Detection::positive("second"));
}

#[test]
fn test_all_negative_yields_nothing() {
    let detector = Detector::with_probes(vec![
        StaticProbe::negative("first"),
        StaticProbe::negative("second"),
    ])
    .common_checks(false);

    let detection = detector.detect();
    assert!(!detection.detected);
    assert_eq!(detection.reason, "nothing");
}

#[test]
fn test_probe_errors_are_absorbed() {
    let detector = Detector::with_probes(vec![
        StaticProbe::failing("denied", ErrorKind::PermissionDenied),
        StaticProbe::failing("missing", ErrorKind::NotFound),
        StaticProbe::negative("clean"),
    ])
    .common_checks(false);

    assert_eq!(detector.detect(), Detection::negative());
}

#[test]
fn test_probe_error_does_not_mask_later_signal() {
    let detector = Detector::with_probes(vec![
        StaticProbe::failing("denied", ErrorKind::PermissionDenied),
        StaticProbe::positive("later"),
    ])
    .common_checks(false);

    assert_eq!(detector.detect(), Detection::positive("later"));
}

#[test]
fn test_clean_synthetic_system_is_negative() -> Result<()> {
    let root = tempfile::tempdir()?;
    fs::write(root.path().join("modules"), "ext4 909312 1 - Live 0x0\n")?;
    fs::write(root.path().join("cpuinfo"), "vendor_id\t: GenuineIntel\n")?;
    fs::create_dir(root.path().join("dmi"))?;
    fs::write(root.path().join("dmi").join("sys_vendor"), "Dell Inc.\n")?;
    fs::write(root.path().join("kmsg"), "6,1,0;Linux version 6.8.0\n")?;
    fs::create_dir(root.path().join("device-tree"))?;

    let detection = synthetic_detector(root.path()).detect();
    assert_eq!(detection, Detection::negative());
    Ok(())
}

#[test]
fn test_dmi_vendor_string_fires_dmi_probe() -> Result<()> {
    let root = tempfile::tempdir()?;
    fs::write(root.path().join("modules"), "ext4 909312 1 - Live 0x0\n")?;
    fs::write(root.path().join("cpuinfo"), "vendor_id\t: GenuineIntel\n")?;
    fs::create_dir(root.path().join("dmi"))?;
    fs::write(
        root.path().join("dmi").join("sys_vendor"),
        "Manufacturer: QEMU\n",
    )?;

    let detection = synthetic_detector(root.path()).detect();
    assert_eq!(
        detection,
        Detection::positive("DMI Table (/sys/class/dmi/id/*)")
    );
    Ok(())
}

#[test]
fn test_module_listing_outranks_dmi() -> Result<()> {
    let root = tempfile::tempdir()?;
    fs::write(
        root.path().join("modules"),
        "vboxguest 434176 2 vboxsf, Live 0xffffffffc05c4000\n",
    )?;
    fs::create_dir(root.path().join("dmi"))?;
    fs::write(root.path().join("dmi").join("sys_vendor"), "innotek GmbH\n")?;

    let detection = synthetic_detector(root.path()).detect();
    assert_eq!(
        detection,
        Detection::positive("Kernel module (/proc/modules)")
    );
    Ok(())
}

#[test]
fn test_device_tree_node_detected() -> Result<()> {
    let root = tempfile::tempdir()?;
    fs::create_dir_all(root.path().join("device-tree").join("fw-cfg"))?;

    let detection = synthetic_detector(root.path()).detect();
    assert_eq!(
        detection,
        Detection::positive("VM device tree (/proc/device-tree)")
    );
    Ok(())
}

#[test]
fn test_entirely_absent_artifacts_yield_nothing() -> Result<()> {
    // No synthetic files at all: every probe degrades to negative.
    let root = tempfile::tempdir()?;
    let detection = synthetic_detector(root.path()).detect();
    assert_eq!(detection, Detection::negative());
    Ok(())
}

#[test]
#[ignore]
fn test_detect_live() {
    env_logger::init();
    let detection = vmsense::is_running_in_virtual_machine();
    println!("{detection:?}");
}
