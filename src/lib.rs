// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Virtprobe - runtime hypervisor identification for Linux.
//!
//! This crate backs three small binaries:
//! - `virtprobe` (`src/main.rs`) - reports which hypervisor the system is
//!   running under, or nothing on bare metal
//! - `local_ip` - tests whether an IP address is assigned to this system
//! - `valid_address` - validates IPv4/IPv6 network prefixes
//!
//! Architecture highlights:
//! - `detect`: the detection sources (CPUID signature, DMI vendor table,
//!   legacy Xen pseudo-files, PCI enumeration) and the orchestrator that
//!   runs them as a prioritized fallback chain
//! - `config`: persisted settings (exit-code policy, Xen label vocabulary)
//! - `net`: the standalone address utilities

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod net;

pub use error::{ProbeError, Result};
