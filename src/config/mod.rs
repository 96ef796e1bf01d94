// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Settings management for virtprobe
//!
//! Handles loading settings from ~/.virtprobe/settings.json. Every field
//! is optional with a default, so a missing file is the common case and
//! not an error. The two settings both cover behavior the tool's own
//! historical revisions disagreed on, which is why they are configuration
//! rather than constants.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detect::XenVocabulary;
use crate::error::{ProbeError, Result};

/// Settings file location relative to the home directory
const SETTINGS_FILE: &str = ".virtprobe/settings.json";

/// What the process exit status says when no hypervisor was identified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPolicy {
    /// Exit 0 whether or not a vendor was identified; "bare metal" is a
    /// legitimate answer
    #[default]
    AlwaysZero,
    /// Exit 1 when nothing was detected, for scripts that branch on it
    NonzeroOnUndetected,
}

impl ExitPolicy {
    /// Exit code for a run that produced no detection
    pub fn undetected_exit_code(&self) -> i32 {
        match self {
            ExitPolicy::AlwaysZero => 0,
            ExitPolicy::NonzeroOnUndetected => 1,
        }
    }
}

/// Main settings structure, stored in ~/.virtprobe/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Exit status behavior when no hypervisor is detected
    #[serde(default)]
    pub exit_policy: ExitPolicy,

    /// Label set for the Xen domain modes (dom0/domU vs none/para)
    #[serde(default)]
    pub xen_vocabulary: XenVocabulary,
}

impl Settings {
    /// Default on-disk location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_FILE))
    }

    /// Load settings from the given path, or the default location.
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Settings::default()),
            },
        };

        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|err| {
            ProbeError::Config(format!("{}: {}", path.display(), err))
        })
    }
}
