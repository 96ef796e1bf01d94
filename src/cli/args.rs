// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! CLI argument definitions using Clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::detect::XenVocabulary;

/// Virtprobe - report which hypervisor this system is running under
#[derive(Parser, Debug)]
#[command(name = "virtprobe")]
#[command(version, about = "Report which hypervisor this system is running under")]
pub struct Cli {
    /// Settings file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with status 1 when no hypervisor is detected
    #[arg(long)]
    pub strict_exit: bool,

    /// Label set for Xen domain modes
    #[arg(long, value_enum)]
    pub xen_labels: Option<XenLabelStyle>,
}

/// Output format for the detection result
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single vendor line, nothing when undetected
    #[default]
    Text,

    /// JSON object, emitted whether or not anything was detected
    Json,
}

/// CLI-facing names for the Xen label vocabularies
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum XenLabelStyle {
    /// dom0 / domU
    Domain,
    /// none / para
    Legacy,
}

impl From<XenLabelStyle> for XenVocabulary {
    fn from(style: XenLabelStyle) -> Self {
        match style {
            XenLabelStyle::Domain => XenVocabulary::Domain,
            XenLabelStyle::Legacy => XenVocabulary::Legacy,
        }
    }
}
