// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! DMI firmware vendor source
//!
//! Several hypervisors forge or pass through a recognizable vendor string
//! in the system firmware tables. Hyper-V shares the `Microsoft
//! Corporation` string with VirtualPC but has its own CPUID signature,
//! which is why this source only runs after the CPUID source came up
//! empty.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::report::{Detection, HypervisorReport, Vendor};
use super::DetectionSource;

/// Default vendor identification file
pub const SYS_DMI_VENDOR: &str = "/sys/class/dmi/id/sys_vendor";

/// Known firmware vendor prefixes, first match wins
const DMI_VENDORS: &[(&str, Vendor)] = &[
    ("VMware", Vendor::VMware),
    ("Microsoft Corporation", Vendor::VirtualPc),
    ("innotek GmbH", Vendor::VirtualBox),
    ("Parallels", Vendor::Parallels),
];

/// Detection source reading the DMI sys_vendor file
pub struct DmiSource {
    path: PathBuf,
}

impl DmiSource {
    pub fn new() -> Self {
        Self::with_path(SYS_DMI_VENDOR)
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        DmiSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for DmiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionSource for DmiSource {
    fn name(&self) -> &'static str {
        "dmi"
    }

    fn probe(&self) -> Detection {
        // Missing on real hardware without a DMI path, or unreadable
        // without privileges. Either way: not this source's case.
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "dmi vendor file unreadable");
                return Detection::NotDetected;
            }
        };

        let vendor_line = content.lines().next().unwrap_or("");
        for (prefix, vendor) in DMI_VENDORS {
            if vendor_line.starts_with(prefix) {
                debug!(vendor = vendor.label(), "matched dmi vendor prefix");
                return Detection::Detected(HypervisorReport::new(*vendor));
            }
        }

        debug!(vendor_line = vendor_line, "dmi vendor not recognized");
        Detection::NotDetected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dmi_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn probe(content: &str) -> Detection {
        let file = dmi_file(content);
        DmiSource::with_path(file.path()).probe()
    }

    #[test]
    fn test_vmware_vendor() {
        assert_eq!(
            probe("VMware, Inc.\n"),
            Detection::Detected(HypervisorReport::new(Vendor::VMware))
        );
    }

    #[test]
    fn test_virtualpc_vendor() {
        assert_eq!(
            probe("Microsoft Corporation\n"),
            Detection::Detected(HypervisorReport::new(Vendor::VirtualPc))
        );
    }

    #[test]
    fn test_virtualbox_vendor() {
        assert_eq!(
            probe("innotek GmbH\n"),
            Detection::Detected(HypervisorReport::new(Vendor::VirtualBox))
        );
    }

    #[test]
    fn test_parallels_vendor() {
        assert_eq!(
            probe("Parallels Software International Inc.\n"),
            Detection::Detected(HypervisorReport::new(Vendor::Parallels))
        );
    }

    #[test]
    fn test_unrecognized_vendor() {
        assert_eq!(probe("Dell Inc.\n"), Detection::NotDetected);
    }

    #[test]
    fn test_prefix_must_start_the_line() {
        assert_eq!(probe("Not VMware\n"), Detection::NotDetected);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(probe(""), Detection::NotDetected);
    }

    #[test]
    fn test_only_first_line_is_considered() {
        assert_eq!(probe("Dell Inc.\nVMware\n"), Detection::NotDetected);
    }

    #[test]
    fn test_missing_file() {
        let source = DmiSource::with_path("/nonexistent/sys_vendor");
        assert_eq!(source.probe(), Detection::NotDetected);
        assert_eq!(source.name(), "dmi");
    }
}
