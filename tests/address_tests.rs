// SPDX-License-Identifier: GPL-2.0-only
// Copyright (C) 2026 Virtprobe Contributors

//! Integration coverage for the address utilities

use virtprobe::net::{is_local_address, validate_prefix};

#[test]
fn loopback_v4_is_local() {
    assert!(is_local_address("127.0.0.1".parse().unwrap()).unwrap());
}

#[test]
#[ignore = "requires an IPv6-enabled network stack"]
fn loopback_v6_is_local() {
    assert!(is_local_address("::1".parse().unwrap()).unwrap());
}

#[test]
fn documentation_address_is_not_local() {
    assert!(!is_local_address("192.0.2.1".parse().unwrap()).unwrap());
}

#[test]
fn iproute_prefix_acceptance_table() {
    let accepted = [
        "dhcp",
        "dhcpv6",
        "192.168.1.10/24",
        "10.1.2.3/8",
        "172.16.0.1/12",
        "192.168.1.0/31",
        "192.168.1.10/32",
        "2001:db8::1/64",
        "2001:db8::1/128",
    ];
    for prefix in accepted {
        assert!(validate_prefix(prefix).is_ok(), "expected valid: {prefix}");
    }
}

#[test]
fn iproute_prefix_rejection_table() {
    let rejected = [
        "",
        "10.8/16",
        "192.168.1.10",
        "192.168.1.0/24",
        "192.168.1.255/24",
        "192.168.1.10/0",
        "192.168.1.10/33",
        "300.1.1.1/24",
        "2001:db8::1",
        "2001:db8::1/1",
        "2001:db8::1/129",
        "fe80::1/64",
        "ff02::1/16",
        "::/64",
    ];
    for prefix in rejected {
        assert!(validate_prefix(prefix).is_err(), "expected invalid: {prefix}");
    }
}
