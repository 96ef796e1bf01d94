// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Error types for virtprobe
//!
//! Detection sources deliberately never produce errors: an unreadable
//! pseudo-file means "this source does not apply here" and the chain moves
//! on. Errors exist only at the edges - loading settings, and argument
//! handling in the address utilities.

use thiserror::Error;

/// Main error type for virtprobe operations
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for virtprobe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_config() {
        let err = ProbeError::Config("bad settings".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad settings"));
    }

    #[test]
    fn test_probe_error_invalid_input() {
        let err = ProbeError::InvalidInput("not an address".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_probe_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let probe_err: ProbeError = io_err.into();
        assert!(probe_err.to_string().contains("IO error"));
    }

    #[test]
    fn test_probe_error_debug() {
        let err = ProbeError::Config("x".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_fn() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(test_fn().unwrap(), 42);
    }
}
