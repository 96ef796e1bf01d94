// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! PCI enumeration source
//!
//! Fully virtualized Xen guests on architectures without the CPUID leaf
//! still expose the Xen platform PCI device, so scanning the kernel's PCI
//! device table is the last resort in the chain.
//!
//! The table is one device per line: bus/devfn as hex, tab, vendor and
//! device IDs as eight hex digits, tab, then driver data this scanner
//! ignores (see drivers/pci/proc.c in the kernel for the full format).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::report::{Detection, HypervisorReport, Vendor, XenMode};
use super::DetectionSource;

/// Default PCI device enumeration pseudo-file
pub const PROC_PCI_DEVICES: &str = "/proc/bus/pci/devices";

/// Xen platform device, present in fully virtualized Xen guests
pub const XEN_PLATFORM_VENDOR: u16 = 0x5853;
pub const XEN_PLATFORM_DEVICE: u16 = 0x0001;

/// Detection source scanning the PCI device table for the Xen platform
/// device
pub struct PciSource {
    path: PathBuf,
    vendor: u16,
    device: u16,
}

impl PciSource {
    pub fn new() -> Self {
        Self::with_path(PROC_PCI_DEVICES, XEN_PLATFORM_VENDOR, XEN_PLATFORM_DEVICE)
    }

    pub fn with_path(path: impl AsRef<Path>, vendor: u16, device: u16) -> Self {
        PciSource {
            path: path.as_ref().to_path_buf(),
            vendor,
            device,
        }
    }

    /// Scan the device table for the target vendor/device pair.
    /// An absent file means the kernel does not expose the table on this
    /// platform, which counts as absence of the device.
    pub fn has_device(&self) -> bool {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "pci device table unreadable");
                return false;
            }
        };

        content
            .lines()
            .filter_map(parse_device_line)
            .any(|(vendor, device)| vendor == self.vendor && device == self.device)
    }
}

/// Parse one enumeration line into (vendor, device).
///
/// Parsing stops at the first field that does not match the expected
/// shape; the caller skips such lines rather than failing the scan.
fn parse_device_line(line: &str) -> Option<(u16, u16)> {
    let mut fields = line.split('\t');

    // Bus and devfn: exactly four hex digits, value unused
    let busdevfn = fields.next()?;
    if busdevfn.len() != 4 {
        return None;
    }
    u16::from_str_radix(busdevfn, 16).ok()?;

    // Vendor ID in the high four digits, device ID in the low four.
    // `get` keeps a stray multi-byte character from panicking the split;
    // from_str_radix then rejects anything that is not hex.
    let ids = fields.next()?;
    if ids.len() != 8 {
        return None;
    }
    let vendor = u16::from_str_radix(ids.get(..4)?, 16).ok()?;
    let device = u16::from_str_radix(ids.get(4..)?, 16).ok()?;

    Some((vendor, device))
}

impl Default for PciSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionSource for PciSource {
    fn name(&self) -> &'static str {
        "pci"
    }

    fn probe(&self) -> Detection {
        if self.has_device() {
            debug!(
                vendor = self.vendor,
                device = self.device,
                "found platform pci device"
            );
            Detection::Detected(HypervisorReport::with_mode(Vendor::Xen, XenMode::Full))
        } else {
            Detection::NotDetected
        }
    }
}
