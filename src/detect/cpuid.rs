// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! CPUID hypervisor signature source
//!
//! Modern hypervisors identify themselves through the hypervisor
//! information leaf, which a bare-metal CPU does not populate. This is the
//! preferred source and authoritative when present, but older hypervisors
//! predate the convention.

use tracing::debug;

use super::report::{Detection, HypervisorReport, Vendor, XenMode};
use super::DetectionSource;

/// CPUID leaf returning hypervisor information.
/// EAX: maximum input value for CPUID supported by the hypervisor.
/// EBX, ECX, EDX: hypervisor vendor ID signature, e.g. `VMwareVMware`.
const HYPERVISOR_INFO_LEAF: u32 = 0x4000_0000;

/// Known vendor signatures, first match wins. KVM pads its 9-byte
/// signature with arbitrary bytes, hence the prefix comparison.
const SIGNATURES: &[(&[u8], Vendor, Option<XenMode>)] = &[
    (b"XenVMMXenVMM", Vendor::Xen, Some(XenMode::Hvm)),
    (b"KVMKVMKVM", Vendor::Kvm, None),
    (b"Microsoft Hv", Vendor::HyperV, None),
    (b"VMwareVMware", Vendor::VMware, None),
];

/// Read the 12-byte hypervisor vendor signature from EBX/ECX/EDX.
#[cfg(target_arch = "x86_64")]
pub fn read_vendor_signature() -> [u8; 12] {
    // Always safe to issue on x86_64; on bare metal the leaf is not
    // defined and the registers come back zero or as echoes of the
    // highest standard leaf, which the zero/table checks absorb.
    let r = unsafe { std::arch::x86_64::__cpuid(HYPERVISOR_INFO_LEAF) };

    let mut signature = [0u8; 12];
    signature[0..4].copy_from_slice(&r.ebx.to_le_bytes());
    signature[4..8].copy_from_slice(&r.ecx.to_le_bytes());
    signature[8..12].copy_from_slice(&r.edx.to_le_bytes());
    signature
}

/// Architectures without the instruction report the zero signature, which
/// classifies as not-detected. Never an error.
#[cfg(not(target_arch = "x86_64"))]
pub fn read_vendor_signature() -> [u8; 12] {
    [0u8; 12]
}

/// Map a raw signature buffer to a detection outcome.
///
/// An all-zero buffer means the leaf is unsupported (bare metal, or a
/// non-x86 stub). An unrecognized non-zero buffer also reports
/// not-detected so the chain can fall through to the DMI source.
pub fn classify_signature(signature: &[u8; 12]) -> Detection {
    if signature.iter().all(|&b| b == 0) {
        return Detection::NotDetected;
    }

    for (pattern, vendor, mode) in SIGNATURES {
        if signature.starts_with(pattern) {
            return Detection::Detected(HypervisorReport {
                vendor: *vendor,
                mode: *mode,
            });
        }
    }

    Detection::NotDetected
}

/// Detection source wrapping the CPUID read
///
/// The signature reader is injectable so tests can exercise the table
/// without depending on the host CPU.
pub struct CpuidSource {
    reader: fn() -> [u8; 12],
}

impl CpuidSource {
    pub fn new() -> Self {
        CpuidSource {
            reader: read_vendor_signature,
        }
    }

    pub fn with_reader(reader: fn() -> [u8; 12]) -> Self {
        CpuidSource { reader }
    }
}

impl Default for CpuidSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionSource for CpuidSource {
    fn name(&self) -> &'static str {
        "cpuid"
    }

    fn probe(&self) -> Detection {
        let signature = (self.reader)();
        let detection = classify_signature(&signature);
        debug!(
            signature = %String::from_utf8_lossy(&signature),
            detected = detection.is_detected(),
            "probed cpuid hypervisor leaf"
        );
        detection
    }
}
