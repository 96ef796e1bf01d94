// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Hypervisor detection chain
//!
//! Four independent sources probed in priority order: the CPUID signature
//! (authoritative on modern hypervisors), the DMI vendor table, the legacy
//! Xen pseudo-files, and finally PCI enumeration. The first source to
//! report a vendor wins; sources never merge evidence or talk to each
//! other, and every run starts from scratch.

pub mod cpuid;
pub mod dmi;
pub mod pci;
pub mod report;
pub mod xen;

pub use cpuid::CpuidSource;
pub use dmi::DmiSource;
pub use pci::PciSource;
pub use report::{Detection, HypervisorReport, Vendor, XenMode, XenVocabulary};
pub use xen::XenSource;

use tracing::debug;

/// One detection strategy in the fallback chain
///
/// A source always returns a definite outcome. Unavailable data (missing
/// pseudo-file, unsupported instruction) is reported as `NotDetected`,
/// never as an error.
pub trait DetectionSource {
    /// Short name for diagnostics
    fn name(&self) -> &'static str;

    /// Probe this source once
    fn probe(&self) -> Detection;
}

/// Runs the detection sources in order and owns the combined decision
pub struct Detector {
    sources: Vec<Box<dyn DetectionSource>>,
}

impl Detector {
    /// The standard chain against the live system
    pub fn new() -> Self {
        Self::with_sources(vec![
            Box::new(CpuidSource::new()),
            Box::new(DmiSource::new()),
            Box::new(XenSource::new()),
            Box::new(PciSource::new()),
        ])
    }

    /// A chain over arbitrary sources, for tests and embedders
    pub fn with_sources(sources: Vec<Box<dyn DetectionSource>>) -> Self {
        Detector { sources }
    }

    /// Probe each source in turn, short-circuiting on the first hit
    pub fn run(&self) -> Detection {
        for source in &self.sources {
            let detection = source.probe();
            if let Detection::Detected(report) = detection {
                debug!(
                    source = source.name(),
                    vendor = report.vendor.label(),
                    "hypervisor detected"
                );
                return detection;
            }
            debug!(source = source.name(), "source inconclusive");
        }

        debug!("all sources exhausted, no hypervisor detected");
        Detection::NotDetected
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stub source that counts how often it was probed
    struct CountingSource {
        name: &'static str,
        outcome: Detection,
        calls: Rc<Cell<usize>>,
    }

    impl CountingSource {
        fn new(name: &'static str, outcome: Detection) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            (
                CountingSource {
                    name,
                    outcome,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl DetectionSource for CountingSource {
        fn name(&self) -> &'static str {
            self.name
        }

        fn probe(&self) -> Detection {
            self.calls.set(self.calls.get() + 1);
            self.outcome
        }
    }

    #[test]
    fn test_first_hit_short_circuits() {
        let hit = Detection::Detected(HypervisorReport::new(Vendor::VMware));
        let (first, first_calls) = CountingSource::new("first", hit);
        let (second, second_calls) = CountingSource::new("second", Detection::NotDetected);

        let detector = Detector::with_sources(vec![Box::new(first), Box::new(second)]);
        assert_eq!(detector.run(), hit);
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn test_falls_through_to_later_source() {
        let hit = Detection::Detected(HypervisorReport::with_mode(
            Vendor::Xen,
            XenMode::PrivilegedDomain,
        ));
        let (first, first_calls) = CountingSource::new("first", Detection::NotDetected);
        let (second, second_calls) = CountingSource::new("second", Detection::NotDetected);
        let (third, third_calls) = CountingSource::new("third", hit);
        let (fourth, fourth_calls) = CountingSource::new("fourth", Detection::NotDetected);

        let detector = Detector::with_sources(vec![
            Box::new(first),
            Box::new(second),
            Box::new(third),
            Box::new(fourth),
        ]);
        assert_eq!(detector.run(), hit);
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 1);
        assert_eq!(third_calls.get(), 1);
        assert_eq!(fourth_calls.get(), 0);
    }

    #[test]
    fn test_all_sources_exhausted() {
        let (first, _) = CountingSource::new("first", Detection::NotDetected);
        let (second, _) = CountingSource::new("second", Detection::NotDetected);

        let detector = Detector::with_sources(vec![Box::new(first), Box::new(second)]);
        assert_eq!(detector.run(), Detection::NotDetected);
    }

    #[test]
    fn test_empty_chain_reports_nothing() {
        let detector = Detector::with_sources(vec![]);
        assert_eq!(detector.run(), Detection::NotDetected);
    }

    #[test]
    fn test_runs_are_independent() {
        let (source, calls) = CountingSource::new("only", Detection::NotDetected);
        let detector = Detector::with_sources(vec![Box::new(source)]);
        detector.run();
        detector.run();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_default_chain_runs_on_host() {
        // Whatever the host is, the chain must terminate with a definite
        // outcome and never panic
        let _ = Detector::new().run();
    }
}
