// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Network prefix validation with iproute parsing rules
//!
//! IPv4 addresses require the full four-tuple because iproute parses
//! `10.8` as `10.8.0.0`, not `10.0.0.8`, so shorthand forms are rejected
//! outright rather than guessed at. The literals `dhcp` and `dhcpv6` are
//! accepted as-is.

use std::net::Ipv6Addr;

use crate::error::{ProbeError, Result};

/// Validate one address/prefix string, e.g. `192.168.1.10/24` or
/// `2001:db8::1/64`.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix == "dhcp" || prefix == "dhcpv6" {
        return Ok(());
    }

    if prefix.contains(':') {
        validate_ipv6(prefix)
    } else {
        validate_ipv4(prefix)
    }
}

fn invalid(reason: impl Into<String>) -> ProbeError {
    ProbeError::InvalidInput(reason.into())
}

fn validate_ipv4(prefix: &str) -> Result<()> {
    let (addr_part, len_part) = prefix
        .split_once('/')
        .ok_or_else(|| invalid("Invalid IPv4 address/prefix"))?;

    let mut addr: u32 = 0;
    let octets: Vec<&str> = addr_part.split('.').collect();
    if octets.len() != 4 {
        return Err(invalid("Invalid IPv4 address/prefix"));
    }
    for octet in octets {
        let value: u32 = octet
            .parse()
            .map_err(|_| invalid("Invalid IPv4 address/prefix"))?;
        if value > 255 {
            return Err(invalid("Invalid IPv4 address/prefix"));
        }
        addr = (addr << 8) | value;
    }

    let prefix_len: u32 = len_part
        .parse()
        .map_err(|_| invalid("Invalid IPv4 address/prefix"))?;
    if prefix_len == 0 || prefix_len > 32 {
        return Err(invalid(format!(
            "Invalid prefix len {} for IP",
            prefix_len
        )));
    }

    // /31 point-to-point links and /32 hosts have no network or broadcast
    // address to collide with
    if prefix_len < 31 {
        let net_mask: u32 = !0 << (32 - prefix_len);
        let broadcast = (addr & net_mask) | !net_mask;

        if addr & net_mask == addr {
            return Err(invalid("Can not assign network address as IP address"));
        }
        if addr == broadcast {
            return Err(invalid("Can not assign broadcast address as IP address"));
        }
    }

    Ok(())
}

fn validate_ipv6(prefix: &str) -> Result<()> {
    let (addr_part, len_part) = prefix
        .split_once('/')
        .ok_or_else(|| invalid("Missing network prefix"))?;

    let prefix_len: u32 = len_part
        .parse()
        .map_err(|_| invalid("Non-digit in prefix length"))?;
    if prefix_len <= 1 || prefix_len > 128 {
        return Err(invalid(format!(
            "Invalid prefix len {} for IPv6",
            prefix_len
        )));
    }

    let addr: Ipv6Addr = addr_part
        .parse()
        .map_err(|_| invalid("Invalid IPv6 address"))?;

    if is_link_local(&addr) {
        return Err(invalid(
            "Can not assign an address reserved for IPv6 link local",
        ));
    }
    if addr.is_multicast() {
        return Err(invalid(
            "Can not assign an address reserved for IPv6 multicast",
        ));
    }
    if addr.is_unspecified() {
        return Err(invalid(
            "Can not assign IPv6 reserved for IPv6 unspecified address",
        ));
    }

    Ok(())
}

/// fe80::/10
fn is_link_local(addr: &Ipv6Addr) -> bool {
    addr.segments()[0] & 0xffc0 == 0xfe80
}
