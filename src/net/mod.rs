// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Standalone address utilities
//!
//! These back the `local_ip` and `valid_address` binaries. They share
//! nothing with the detection chain beyond the crate's error type.

pub mod bind;
pub mod prefix;

pub use bind::*;
pub use prefix::*;
