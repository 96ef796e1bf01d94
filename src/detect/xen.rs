// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Legacy Xen paravirtualization source
//!
//! Handles Xen generations predating the CPUID signature convention.
//! Three successive checks:
//! 1. `/sys/hypervisor/type` content starting with `xen`
//! 2. the `/proc/xen` marker directory, with `/proc/xen/capabilities`
//!    distinguishing the privileged domain (`control_d`) from a guest
//! 3. neither present - not detected
//!
//! Missing files at every step mean "not this case", never an error. A
//! present marker with an unreadable capabilities file is still a positive
//! detection, with the mode left unspecified.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::report::{Detection, HypervisorReport, Vendor, XenMode};
use super::DetectionSource;

/// Default kernel-exposed hypervisor type file
pub const SYS_HYPERVISOR_TYPE: &str = "/sys/hypervisor/type";
/// Default legacy Xen root marker
pub const PROC_XEN: &str = "/proc/xen";
/// Default capabilities file beneath the root marker
pub const PROC_XEN_CAPABILITIES: &str = "/proc/xen/capabilities";

/// Token identifying the privileged management domain
const CONTROL_DOMAIN_TOKEN: &str = "control_d";

/// Detection source probing the legacy Xen pseudo-files
pub struct XenSource {
    type_path: PathBuf,
    root_path: PathBuf,
    capabilities_path: PathBuf,
}

impl XenSource {
    pub fn new() -> Self {
        Self::with_paths(SYS_HYPERVISOR_TYPE, PROC_XEN, PROC_XEN_CAPABILITIES)
    }

    pub fn with_paths(
        type_path: impl AsRef<Path>,
        root_path: impl AsRef<Path>,
        capabilities_path: impl AsRef<Path>,
    ) -> Self {
        XenSource {
            type_path: type_path.as_ref().to_path_buf(),
            root_path: root_path.as_ref().to_path_buf(),
            capabilities_path: capabilities_path.as_ref().to_path_buf(),
        }
    }

    /// Classify the capabilities file content: the privileged domain
    /// advertises `control_d` as its first token.
    fn classify_capabilities(content: &str) -> XenMode {
        match content.split_whitespace().next() {
            Some(CONTROL_DOMAIN_TOKEN) => XenMode::PrivilegedDomain,
            _ => XenMode::GuestDomain,
        }
    }
}

impl Default for XenSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionSource for XenSource {
    fn name(&self) -> &'static str {
        "xen"
    }

    fn probe(&self) -> Detection {
        if let Ok(hypervisor_type) = fs::read_to_string(&self.type_path) {
            if hypervisor_type.starts_with("xen") {
                debug!(path = %self.type_path.display(), "hypervisor type file reports xen");
                return Detection::Detected(HypervisorReport::new(Vendor::Xen));
            }
            debug!(
                content = hypervisor_type.trim(),
                "hypervisor type file present but not xen"
            );
        }

        if self.root_path.exists() {
            // Marker presence alone is evidence; the capabilities file may
            // be unreadable inside an unprivileged guest.
            return match fs::read_to_string(&self.capabilities_path) {
                Ok(capabilities) => {
                    let mode = Self::classify_capabilities(&capabilities);
                    debug!(?mode, "classified xen capabilities");
                    Detection::Detected(HypervisorReport::with_mode(Vendor::Xen, mode))
                }
                Err(err) => {
                    debug!(%err, "xen root marker present, capabilities unreadable");
                    Detection::Detected(HypervisorReport::new(Vendor::Xen))
                }
            };
        }

        Detection::NotDetected
    }
}
