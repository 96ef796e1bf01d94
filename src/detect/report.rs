// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Detection outcome types
//!
//! A detection pass produces at most one vendor. All state here is
//! transient: nothing survives beyond a single pass, because VM status can
//! only change across a reboot of the guest.

use serde::{Deserialize, Serialize};

/// Known hypervisor vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    Xen,
    Kvm,
    HyperV,
    VMware,
    VirtualPc,
    VirtualBox,
    Parallels,
}

impl Vendor {
    /// Vendor label as reported to the shell
    pub fn label(&self) -> &'static str {
        match self {
            Vendor::Xen => "Xen",
            Vendor::Kvm => "KVM",
            Vendor::HyperV => "Microsoft HyperV",
            Vendor::VMware => "VMware",
            Vendor::VirtualPc => "VirtualPC",
            Vendor::VirtualBox => "VirtualBox",
            Vendor::Parallels => "Parallels",
        }
    }
}

/// Xen sub-mode qualifier
///
/// Only Xen carries a mode; every other vendor reports its bare label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XenMode {
    /// Fully virtualized guest, identified via the CPUID signature
    Hvm,
    /// Privileged management domain (historically `dom0`, or `none` in the
    /// older label vocabulary)
    PrivilegedDomain,
    /// Ordinary guest domain (historically `domU`, or `para`)
    GuestDomain,
    /// Full virtualization detected via the Xen platform PCI device
    Full,
}

/// Which historical label set to emit for the Xen domain modes
///
/// The tool's own revisions disagreed on these strings, so the choice is
/// left to the caller rather than baked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XenVocabulary {
    /// `dom0` / `domU`
    #[default]
    Domain,
    /// `none` / `para`
    Legacy,
}

impl XenMode {
    /// Mode qualifier string under the given vocabulary
    pub fn label(&self, vocabulary: XenVocabulary) -> &'static str {
        match (self, vocabulary) {
            (XenMode::Hvm, _) => "hvm",
            (XenMode::Full, _) => "full",
            (XenMode::PrivilegedDomain, XenVocabulary::Domain) => "dom0",
            (XenMode::PrivilegedDomain, XenVocabulary::Legacy) => "none",
            (XenMode::GuestDomain, XenVocabulary::Domain) => "domU",
            (XenMode::GuestDomain, XenVocabulary::Legacy) => "para",
        }
    }
}

/// A positive identification: vendor plus optional mode qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypervisorReport {
    pub vendor: Vendor,
    pub mode: Option<XenMode>,
}

impl HypervisorReport {
    pub fn new(vendor: Vendor) -> Self {
        HypervisorReport { vendor, mode: None }
    }

    pub fn with_mode(vendor: Vendor, mode: XenMode) -> Self {
        HypervisorReport {
            vendor,
            mode: Some(mode),
        }
    }

    /// Render the single output line, e.g. `Xen dom0` or `VMware`
    pub fn render(&self, vocabulary: XenVocabulary) -> String {
        match self.mode {
            Some(mode) => format!("{} {}", self.vendor.label(), mode.label(vocabulary)),
            None => self.vendor.label().to_string(),
        }
    }
}

/// Outcome of probing one source, or of the whole chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Detected(HypervisorReport),
    NotDetected,
}

impl Detection {
    pub fn is_detected(&self) -> bool {
        matches!(self, Detection::Detected(_))
    }

    pub fn report(&self) -> Option<&HypervisorReport> {
        match self {
            Detection::Detected(report) => Some(report),
            Detection::NotDetected => None,
        }
    }
}
