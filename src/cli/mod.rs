// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! CLI module for virtprobe
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::*;
