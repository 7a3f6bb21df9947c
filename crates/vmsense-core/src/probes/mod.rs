//! Built-in detection signals.
//!
//! Each submodule implements [`Probe`](crate::probe::Probe) for one OS
//! artifact. All probes accept an alternative target path so they can be
//! pointed at synthetic filesystem trees in tests; the defaults are the
//! canonical kernel paths.

mod cpu_vendor;
mod device_tree;
mod dmi;
mod hypervisor;
mod kmsg;
mod modules;
mod sysinfo;
mod xen;

pub use self::cpu_vendor::CpuVendor;
pub use self::device_tree::DeviceTree;
pub use self::dmi::DmiTable;
pub use self::hypervisor::HypervisorType;
pub use self::kmsg::KernelRingBuffer;
pub use self::modules::KernelModules;
pub use self::sysinfo::SysInfo;
pub use self::xen::XenProcFile;
