// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bit-level recovery of data embedded in IPv6 addresses. These are pure
//! helpers invoked by the classifier branches, never independently.

/// Join two consecutive 16-bit groups into a dotted-decimal IPv4 address.
pub(crate) fn embedded_ipv4(hi: u16, lo: u16) -> String {
    let [a, b] = hi.to_be_bytes();
    let [c, d] = lo.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/**
Recover the hardware address from a Modified EUI-64 interface identifier
(the last 4 groups of the address as 8 bytes).

A 48-bit MAC is expanded into an EUI-64 by inserting `ff:fe` between its
two halves and flipping the universal/local bit of the first byte.
Returns `None` when the `ff:fe` marker is absent, i.e. the identifier was
not derived from a MAC.
*/
pub(crate) fn eui64_mac(iid: &[u16; 4]) -> Option<String> {
    let mut bytes = [0u8; 8];
    for (i, group) in iid.iter().enumerate() {
        let [hi, lo] = group.to_be_bytes();
        bytes[i * 2] = hi;
        bytes[i * 2 + 1] = lo;
    }

    if bytes[3] != 0xff || bytes[4] != 0xfe {
        return None;
    }

    let mac: [u8; 6] = [
        bytes[0] ^ 0x02, // undo the universal/local bit flip
        bytes[1],
        bytes[2],
        bytes[5],
        bytes[6],
        bytes[7],
    ];
    let parts: Vec<String> = mac.iter().map(|b| format!("{b:02x}")).collect();
    Some(parts.join(":"))
}

/// Fields packed into a Teredo (`2001::/32`) address per RFC 4380.
pub(crate) struct TeredoFields {
    pub server: String,
    pub client: String,
    /// de-obfuscated client UDP port
    pub port: u16,
}

/// Unpack the Teredo server/client addresses and the client port.
/// The client address and port are stored bit-inverted on the wire.
pub(crate) fn teredo_fields(groups: &[u16; 8]) -> TeredoFields {
    TeredoFields {
        server: embedded_ipv4(groups[2], groups[3]),
        port: groups[5] ^ 0xffff,
        client: embedded_ipv4(groups[6] ^ 0xffff, groups[7] ^ 0xffff),
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_ipv4() {
        assert_eq!(embedded_ipv4(0xc0a8, 0x0101), "192.168.1.1");
        assert_eq!(embedded_ipv4(0xc000, 0x0221), "192.0.2.33");
        assert_eq!(embedded_ipv4(0, 0), "0.0.0.0");
    }

    #[test]
    fn test_eui64_recovery() {
        // fe80::1234:56ff:fe78:9abc carries MAC 10:34:56:78:9a:bc
        let mac = eui64_mac(&[0x1234, 0x56ff, 0xfe78, 0x9abc]);
        assert_eq!(mac.as_deref(), Some("10:34:56:78:9a:bc"));
    }

    #[test]
    fn test_eui64_flips_universal_bit_both_ways() {
        let mac = eui64_mac(&[0x0214, 0x22ff, 0xfe01, 0x2345]);
        assert_eq!(mac.as_deref(), Some("00:14:22:01:23:45"));
    }

    #[test]
    fn test_eui64_requires_marker() {
        assert!(eui64_mac(&[0, 0, 0, 1]).is_none());
        assert!(eui64_mac(&[0x1234, 0x5678, 0x9abc, 0xdef0]).is_none());
    }

    #[test]
    fn test_teredo_unpack() {
        // 2001:0:4136:e378:8000:63bf:3fff:fdd2 carries server 65.54.227.120,
        // client 192.0.2.45 behind obfuscated port 40000
        let fields = teredo_fields(&[0x2001, 0, 0x4136, 0xe378, 0x8000, 0x63bf, 0x3fff, 0xfdd2]);
        assert_eq!(fields.server, "65.54.227.120");
        assert_eq!(fields.port, 40000);
        assert_eq!(fields.client, "192.0.2.45");
    }
}
