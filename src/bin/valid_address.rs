// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Validate IPv4/IPv6 network prefixes with iproute parsing rules
//!
//! Checks every argument in order and stops at the first invalid one,
//! printing the reason on stderr. Exit status: 0 when all prefixes are
//! valid, 1 otherwise.

use clap::Parser;

use virtprobe::net::validate_prefix;

/// Validate IPv4/IPv6 network prefixes
#[derive(Parser, Debug)]
#[command(name = "valid_address")]
#[command(version, about = "Validate IPv4/IPv6 network prefixes")]
struct Args {
    /// Prefixes to validate, e.g. 192.168.1.10/24 or 2001:db8::1/64
    #[arg(required = true)]
    prefixes: Vec<String>,
}

fn main() {
    let args = Args::parse();

    for prefix in &args.prefixes {
        if let Err(err) = validate_prefix(prefix) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
