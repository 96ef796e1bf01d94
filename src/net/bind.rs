// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Local address membership test
//!
//! Linux refuses to bind a socket to an address that is not assigned to
//! the system, so a bind attempt answers "is this address local" much
//! faster than scanning every interface.

use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr, TcpListener};

use crate::error::Result;

/// Test whether `addr` is assigned to the local system.
///
/// The probe socket uses an ephemeral port and is closed on return.
/// Returns `Ok(false)` only for the address-not-available case; any other
/// bind failure is a real error.
pub fn is_local_address(addr: IpAddr) -> Result<bool> {
    match TcpListener::bind(SocketAddr::new(addr, 0)) {
        Ok(_listener) => Ok(true),
        Err(err) if err.kind() == ErrorKind::AddrNotAvailable => Ok(false),
        Err(err) => Err(err.into()),
    }
}
