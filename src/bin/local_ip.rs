// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Test whether an IP address is assigned to the local system
//!
//! Exit status: 0 when the address is local, 1 when it is not, other
//! nonzero on bad arguments or socket errors.

use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;

use virtprobe::net::is_local_address;

/// Test whether an IP address is assigned to the local system
#[derive(Parser, Debug)]
#[command(name = "local_ip")]
#[command(version, about = "Test whether an IP address is assigned to the local system")]
struct Args {
    /// IPv4 or IPv6 address to test
    address: IpAddr,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !is_local_address(args.address)? {
        std::process::exit(1);
    }
    Ok(())
}
