// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    citations::{self, addr_arch, Citation},
    embedded::{self, TeredoFields},
    normalize,
    strings::*,
    structs::{AddrKind, ClassificationRecord, IpFam},
};

/// Canonical view of the address consumed by every cascade rule.
struct V6Addr<'a> {
    canonical: &'a str,
    groups: [u16; 8],
}

struct Outcome {
    kind: AddrKind,
    scope: Option<&'static str>,
    notes: Vec<String>,
    citations: Vec<Citation>,
    embedded_ipv4: Option<String>,
    mac_address: Option<String>,
}

impl Outcome {
    fn new(kind: AddrKind) -> Self {
        Self {
            kind,
            scope: None,
            notes: Vec::new(),
            citations: Vec::new(),
            embedded_ipv4: None,
            mac_address: None,
        }
    }
}

/**
The classification cascade. Evaluated in order; the first rule to return
an outcome governs and later rules are never consulted. Ordering is a
correctness invariant: `::1` must hit the loopback rule before anything
broader, and every prefix carve-out must run before the reserved
fallback swallows it.
*/
static CASCADE: &[fn(&V6Addr) -> Option<Outcome>] = &[
    unspecified,
    loopback,
    v4_mapped,
    link_local,
    multicast,
    global_unicast,
    unique_local,
    nat64_prefix,
];

/* ---------------------------------- */

fn unspecified(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups != [0u16; 8] {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Unspecified);
    out.notes.push("The unspecified address (::/128)".into());
    out.notes.push("Must not be assigned to any node".into());
    out.citations.push(addr_arch("section-2.5.2"));
    Some(out)
}

fn loopback(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups != [0, 0, 0, 0, 0, 0, 0, 1] {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Loopback);
    out.notes.push("The loopback address (::1/128)".into());
    out.notes.push("Used to send packets to itself".into());
    out.citations.push(addr_arch("section-2.5.3"));
    Some(out)
}

fn v4_mapped(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups[..6] != [0, 0, 0, 0, 0, 0xffff] {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Ipv4Mapped);
    let inner: String = embedded::embedded_ipv4(addr.groups[6], addr.groups[7]);
    out.notes.push("IPv4-Mapped IPv6 Address (::ffff:0:0/96)".into());
    out.notes.push("Used to represent IPv4 addresses as IPv6 addresses".into());
    out.notes.push(format!("{EMBEDDED_V4}: {inner}"));
    out.citations.push(addr_arch("section-2.5.5.2"));
    out.embedded_ipv4 = Some(inner);
    Some(out)
}

fn link_local(addr: &V6Addr) -> Option<Outcome> {
    if !(0xfe80..=0xfebf).contains(&addr.groups[0]) {
        return None;
    }
    let mut out = Outcome::new(AddrKind::LinkLocal);
    out.scope = Some(SCOPE_LINK);
    out.notes.push("Link-Local Unicast (fe80::/10)".into());
    out.notes.push("Valid only on a single link".into());
    out.citations.push(addr_arch("section-2.5.6"));
    out.citations.push(citations::SLAAC);

    let iid: [u16; 4] = [addr.groups[4], addr.groups[5], addr.groups[6], addr.groups[7]];
    if let Some(mac) = embedded::eui64_mac(&iid) {
        out.notes.push(format!("Derived from MAC: {mac} (Modified EUI-64)"));
        out.citations.push(addr_arch("appendix-A"));
        out.mac_address = Some(mac);
    }
    Some(out)
}

fn multicast(addr: &V6Addr) -> Option<Outcome> {
    let first: u16 = addr.groups[0];
    if first & 0xff00 != 0xff00 {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Multicast);

    let scope_val: u16 = first & 0x000f;
    let flags: u16 = (first & 0x00f0) >> 4;
    let scope: &'static str = scope_name(scope_val);
    out.scope = Some(scope);
    out.notes.push(format!("Multicast Scope: {scope} ({scope_val:x})"));

    // flag nibble is |0|R|P|T|, highest bit reserved
    let flag_bits: [&str; 3] = [
        if flags & 0x4 != 0 { "R=1 (Rendezvous Point embedded)" } else { "R=0 (No Rendezvous Point)" },
        if flags & 0x2 != 0 { "P=1 (Prefix-based)" } else { "P=0 (Not Prefix-based)" },
        if flags & 0x1 != 0 { "T=1 (Transient)" } else { "T=0 (Well-known)" },
    ];
    out.notes.push(format!("Flags: 0x{flags:x} ({})", flag_bits.join(", ")));
    out.citations.push(addr_arch("section-2.7"));
    if flags & 0x2 != 0 {
        out.citations.push(citations::UNICAST_PREFIX_MCAST);
    }
    if flags & 0x4 != 0 {
        out.citations.push(citations::EMBEDDED_RP);
    }

    if let Some(note) = well_known_group(addr) {
        out.notes.push(note.into());
        out.citations.push(addr_arch("section-2.7.1"));
    }
    Some(out)
}

fn global_unicast(addr: &V6Addr) -> Option<Outcome> {
    if !(0x2000..=0x3fff).contains(&addr.groups[0]) {
        return None;
    }
    // specific allocations carved out of 2000::/3, most specific first
    if let Some(out) = teredo(addr)
        .or_else(|| benchmarking(addr))
        .or_else(|| orchid(addr))
        .or_else(|| documentation(addr))
        .or_else(|| six_to_four(addr))
    {
        return Some(out);
    }

    let mut out = Outcome::new(AddrKind::GlobalUnicast);
    out.notes.push("Global Unicast (2000::/3)".into());
    out.notes.push("Currently allocated range for global unicast addresses".into());
    out.notes.push("IANA unicast assignments limited to this range".into());
    out.citations.push(addr_arch("section-2.5.4"));
    out.citations.push(citations::ADDR_ARCH_OLD);
    Some(out)
}

fn unique_local(addr: &V6Addr) -> Option<Outcome> {
    let first: u16 = addr.groups[0];
    if !(0xfc00..=0xfdff).contains(&first) {
        return None;
    }
    let mut out = Outcome::new(AddrKind::UniqueLocal);
    out.scope = Some(SCOPE_ULA);
    out.notes.push("Unique Local Address (fc00::/7)".into());

    if first >= 0xfd00 {
        out.notes.push("Locally assigned (fd00::/8)".into());
        out.notes.push("40-bit random Global ID provides uniqueness".into());
        out.notes.push(format!(
            "Global ID: {:02x}{:04x}{:04x}",
            first & 0xff,
            addr.groups[1],
            addr.groups[2]
        ));
        out.notes.push(format!("Subnet ID: {:04x}", addr.groups[3]));
    } else {
        out.notes.push("Reserved for future definition (fc00::/8)".into());
    }
    out.citations.push(citations::ULA);
    out.citations.push(citations::REGISTRY_UPDATES);
    Some(out)
}

fn nat64_prefix(addr: &V6Addr) -> Option<Outcome> {
    if !addr.canonical.starts_with("0064:ff9b:0000:0000:0000:0000:") {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Nat64);
    let inner: String = embedded::embedded_ipv4(addr.groups[6], addr.groups[7]);
    out.notes.push("NAT64/DNS64 Well-Known Prefix (64:ff9b::/96)".into());
    out.notes.push("Used for IPv4-IPv6 protocol translation".into());
    out.notes.push(format!("{EMBEDDED_V4}: {inner}"));
    out.citations.push(citations::NAT64);
    out.embedded_ipv4 = Some(inner);
    Some(out)
}

/// Everything the cascade did not claim.
fn reserved_by_ietf() -> Outcome {
    let mut out = Outcome::new(AddrKind::ReservedIetf);
    out.notes.push("Reserved by IETF".into());
    out.notes.push("Not allocated for use at this time".into());
    out.citations.push(citations::ADDR_ARCH);
    out
}

/* ---------------------------------- */
// nested allocations within 2000::/3

fn teredo(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups[0] != 0x2001 || addr.groups[1] != 0 {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Teredo);
    let fields: TeredoFields = embedded::teredo_fields(&addr.groups);
    out.notes.push("Teredo Tunneling (2001::/32)".into());
    out.notes.push(format!("Teredo Server: {}", fields.server));
    out.notes.push(format!("Client UDP Port: {} (obfuscated)", fields.port));
    out.notes.push(format!("{EMBEDDED_V4}: {} (Teredo client)", fields.client));
    out.citations.push(citations::TEREDO);
    out.embedded_ipv4 = Some(fields.client);
    Some(out)
}

fn benchmarking(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups[..3] != [0x2001, 0x0002, 0] {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Benchmarking);
    out.notes.push("Benchmarking (2001:2::/48)".into());
    out.notes.push("Reserved for network interconnect device benchmarks".into());
    out.citations.push(citations::BENCHMARKING_V6);
    Some(out)
}

fn orchid(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups[0] != 0x2001 {
        return None;
    }
    match addr.groups[1] & 0xfff0 {
        0x0010 => {
            let mut out = Outcome::new(AddrKind::Orchid);
            out.notes.push("ORCHID (2001:10::/28)".into());
            out.notes.push("Deprecated; non-routed cryptographic hash identifiers".into());
            out.citations.push(citations::ORCHID);
            Some(out)
        }
        0x0020 => {
            let mut out = Outcome::new(AddrKind::OrchidV2);
            out.notes.push("ORCHIDv2 (2001:20::/28)".into());
            out.notes.push("Overlay routable cryptographic hash identifiers".into());
            out.citations.push(citations::ORCHID_V2);
            Some(out)
        }
        _ => None,
    }
}

fn documentation(addr: &V6Addr) -> Option<Outcome> {
    if !addr.canonical.starts_with("2001:0db8:") {
        return None;
    }
    let mut out = Outcome::new(AddrKind::Documentation);
    out.notes.push("Documentation Prefix (2001:db8::/32)".into());
    out.notes.push("Reserved for use in documentation and examples".into());
    out.citations.push(citations::V6_DOCUMENTATION);
    Some(out)
}

fn six_to_four(addr: &V6Addr) -> Option<Outcome> {
    if addr.groups[0] != 0x2002 {
        return None;
    }
    let mut out = Outcome::new(AddrKind::SixToFour);
    let inner: String = embedded::embedded_ipv4(addr.groups[1], addr.groups[2]);
    out.notes.push("6to4 Addressing (2002::/16)".into());
    out.notes.push(format!("{EMBEDDED_V4}: {inner}"));
    out.citations.push(citations::SIX_TO_FOUR);
    out.embedded_ipv4 = Some(inner);
    Some(out)
}

/* ---------------------------------- */

/// Multicast scope from the low nibble of the first group.
fn scope_name(value: u16) -> &'static str {
    match value {
        0x0 => "Reserved",
        0x1 => "Interface-Local",
        0x2 => "Link-Local",
        0x3 => "Realm-Local",
        0x4 => "Admin-Local",
        0x5 => "Site-Local",
        0x8 => "Organization-Local",
        0xe => "Global",
        0xf => "Reserved",
        _ => "Unassigned",
    }
}

static SOLICITED_NODE_PREFIX: &str = "ff02:0000:0000:0000:0000:0001:ff";

#[rustfmt::skip]
static WELL_KNOWN_GROUPS: &[(&str, &str)] = &[
    ("ff01:0000:0000:0000:0000:0000:0000:0001", "All Nodes Address (interface-local scope)"),
    ("ff02:0000:0000:0000:0000:0000:0000:0001", "All Nodes Address (link-local scope)"),
    ("ff01:0000:0000:0000:0000:0000:0000:0002", "All Routers Address (interface-local scope)"),
    ("ff02:0000:0000:0000:0000:0000:0000:0002", "All Routers Address (link-local scope)"),
    ("ff05:0000:0000:0000:0000:0000:0000:0002", "All Routers Address (site-local scope)"),
];

fn well_known_group(addr: &V6Addr) -> Option<&'static str> {
    if let Some(&(_, note)) = WELL_KNOWN_GROUPS.iter().find(|(text, _)| *text == addr.canonical) {
        return Some(note);
    }
    if addr.canonical.starts_with(SOLICITED_NODE_PREFIX) {
        return Some("Solicited-Node Address (ff02::1:ffxx:xxxx)");
    }
    None
}

/* -------------------------------------------------------------------------- */

/// Classify 8 validated groups into a complete record.
pub(crate) fn classify(text: &str, groups: [u16; 8]) -> ClassificationRecord {
    let canonical: String = normalize::canonical(&groups);
    let addr = V6Addr {
        canonical: &canonical,
        groups,
    };

    let mut outcome: Outcome = CASCADE
        .iter()
        .find_map(|rule| rule(&addr))
        .unwrap_or_else(reserved_by_ietf);

    // the single rule allowed to look at the original spelling: the
    // compressed documentation-prefix shorthand gets a cosmetic note
    if text.to_ascii_lowercase().starts_with("2001:db8:") {
        outcome.notes.push(NOTE_DB8_SHORTHAND.into());
    }

    ClassificationRecord {
        fam: IpFam::V6,
        address: text.to_string(),
        canonical: Some(canonical),
        kind: outcome.kind,
        legacy_class: None,
        scope: outcome.scope,
        notes: outcome.notes,
        citations: outcome.citations,
        binary: binary(&groups),
        decimal: None,
        hex: None,
        embedded_ipv4: outcome.embedded_ipv4,
        mac_address: outcome.mac_address,
        translations: None,
    }
}

/// 16-bit zero-padded binary per group, colon-joined.
fn binary(groups: &[u16; 8]) -> String {
    let parts: Vec<String> = groups.iter().map(|g| format!("{g:016b}")).collect();
    parts.join(":")
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::super::normalize::expand;
    use super::*;

    fn classify_text(text: &str) -> ClassificationRecord {
        classify(text, expand(text).unwrap())
    }

    #[test]
    fn test_unspecified_and_loopback() {
        let rec = classify_text("::");
        assert_eq!(rec.kind, AddrKind::Unspecified);

        let rec = classify_text("::1");
        assert_eq!(rec.kind, AddrKind::Loopback);
        assert_eq!(
            rec.canonical.as_deref(),
            Some("0000:0000:0000:0000:0000:0000:0000:0001")
        );
    }

    #[test]
    fn test_v4_mapped() {
        let rec = classify_text("::ffff:c0a8:0101");
        assert_eq!(rec.kind, AddrKind::Ipv4Mapped);
        assert_eq!(rec.embedded_ipv4.as_deref(), Some("192.168.1.1"));
        assert!(rec.mac_address.is_none());
    }

    #[test]
    fn test_link_local_with_mac() {
        let rec = classify_text("fe80::1234:56ff:fe78:9abc");
        assert_eq!(rec.kind, AddrKind::LinkLocal);
        assert_eq!(rec.scope, Some("Link"));
        assert_eq!(rec.mac_address.as_deref(), Some("10:34:56:78:9a:bc"));
        assert!(rec.citations.iter().any(|c| c.section == Some("appendix-A")));
    }

    #[test]
    fn test_link_local_without_mac() {
        let rec = classify_text("fe80::1");
        assert_eq!(rec.kind, AddrKind::LinkLocal);
        assert!(rec.mac_address.is_none());
    }

    #[test]
    fn test_cascade_mutual_exclusivity() {
        // one representative either side of each range boundary
        assert_eq!(classify_text("fe7f::1").kind, AddrKind::ReservedIetf);
        assert_eq!(classify_text("fe80::1").kind, AddrKind::LinkLocal);
        assert_eq!(classify_text("febf::1").kind, AddrKind::LinkLocal);
        assert_eq!(classify_text("fec0::1").kind, AddrKind::ReservedIetf);
        assert_eq!(classify_text("1fff::1").kind, AddrKind::ReservedIetf);
        assert_eq!(classify_text("2000::1").kind, AddrKind::GlobalUnicast);
        assert_eq!(classify_text("3fff::1").kind, AddrKind::GlobalUnicast);
        assert_eq!(classify_text("4000::1").kind, AddrKind::ReservedIetf);
        assert_eq!(classify_text("fbff::1").kind, AddrKind::ReservedIetf);
        assert_eq!(classify_text("fc00::1").kind, AddrKind::UniqueLocal);
        assert_eq!(classify_text("fdff::1").kind, AddrKind::UniqueLocal);
        assert_eq!(classify_text("fe00::1").kind, AddrKind::ReservedIetf);
    }

    #[test]
    fn test_multicast_scope_and_flags() {
        let rec = classify_text("ff02::1");
        assert_eq!(rec.kind, AddrKind::Multicast);
        assert_eq!(rec.scope, Some("Link-Local"));
        assert!(rec.notes.iter().any(|n| n.contains("All Nodes Address (link-local scope)")));
        assert!(rec.notes.iter().any(|n| n.contains("T=0 (Well-known)")));

        let rec = classify_text("ff05::2");
        assert_eq!(rec.scope, Some("Site-Local"));
        assert!(rec.notes.iter().any(|n| n.contains("All Routers Address (site-local scope)")));

        // prefix-based flag pulls in RFC 3306
        let rec = classify_text("ff3e::1234");
        assert_eq!(rec.scope, Some("Global"));
        assert!(rec.notes.iter().any(|n| n.contains("R=0 (No Rendezvous Point)")));
        assert!(rec.notes.iter().any(|n| n.contains("P=1 (Prefix-based)")));
        assert!(rec.citations.iter().any(|c| c.rfc == 3306));
        assert!(!rec.citations.iter().any(|c| c.rfc == 3956));

        // embedded-RP flag pulls in RFC 3956 as well
        let rec = classify_text("ff7e::1234");
        assert!(rec.notes.iter().any(|n| n.contains("R=1 (Rendezvous Point embedded)")));
        assert!(rec.citations.iter().any(|c| c.rfc == 3306));
        assert!(rec.citations.iter().any(|c| c.rfc == 3956));
    }

    #[test]
    fn test_solicited_node() {
        let rec = classify_text("ff02::1:ff12:3456");
        assert!(rec.notes.iter().any(|n| n.contains("Solicited-Node")));
        assert!(rec.citations.iter().any(|c| c.section == Some("section-2.7.1")));
    }

    #[test]
    fn test_documentation_prefix() {
        let rec = classify_text("2001:db8::1");
        assert_eq!(rec.kind, AddrKind::Documentation);
        assert!(rec.citations.iter().any(|c| c.rfc == 3849));
        // shorthand spelling also gets the cosmetic note
        assert!(rec.notes.iter().any(|n| n.contains("Shorthand spelling")));

        let rec = classify_text("2001:0db8:0000:0000:0000:0000:0000:0001");
        assert_eq!(rec.kind, AddrKind::Documentation);
        assert!(!rec.notes.iter().any(|n| n.contains("Shorthand spelling")));
    }

    #[test]
    fn test_six_to_four() {
        let rec = classify_text("2002:0102:0304::");
        assert_eq!(rec.kind, AddrKind::SixToFour);
        assert_eq!(rec.embedded_ipv4.as_deref(), Some("1.2.3.4"));
    }

    #[test]
    fn test_teredo_decode() {
        let rec = classify_text("2001:0:4136:e378:8000:63bf:3fff:fdd2");
        assert_eq!(rec.kind, AddrKind::Teredo);
        assert_eq!(rec.embedded_ipv4.as_deref(), Some("192.0.2.45"));
        assert!(rec.notes.iter().any(|n| n.contains("Teredo Server: 65.54.227.120")));
        assert!(rec.notes.iter().any(|n| n.contains("Client UDP Port: 40000")));
    }

    #[test]
    fn test_benchmarking_and_orchid_carveouts() {
        assert_eq!(classify_text("2001:2:0:1::1").kind, AddrKind::Benchmarking);
        // 2001:2:1:: is outside the /48
        assert_eq!(classify_text("2001:2:1::1").kind, AddrKind::GlobalUnicast);
        assert_eq!(classify_text("2001:10::1").kind, AddrKind::Orchid);
        assert_eq!(classify_text("2001:1f::1").kind, AddrKind::Orchid);
        assert_eq!(classify_text("2001:20::1").kind, AddrKind::OrchidV2);
        assert_eq!(classify_text("2001:2f::1").kind, AddrKind::OrchidV2);
        assert_eq!(classify_text("2001:30::1").kind, AddrKind::GlobalUnicast);
    }

    #[test]
    fn test_unique_local_fields() {
        let rec = classify_text("fd12:3456:789a:1::1");
        assert_eq!(rec.kind, AddrKind::UniqueLocal);
        assert_eq!(rec.scope, Some("Global (locally assigned)"));
        assert!(rec.notes.iter().any(|n| n == "Global ID: 123456789a"));
        assert!(rec.notes.iter().any(|n| n == "Subnet ID: 0001"));

        let rec = classify_text("fc00::1");
        assert!(rec.notes.iter().any(|n| n.contains("Reserved for future definition")));
    }

    #[test]
    fn test_nat64_well_known_prefix() {
        let rec = classify_text("64:ff9b::c000:221");
        assert_eq!(rec.kind, AddrKind::Nat64);
        assert_eq!(rec.embedded_ipv4.as_deref(), Some("192.0.2.33"));
        assert!(rec.citations.iter().any(|c| c.rfc == 6052));
    }

    #[test]
    fn test_binary_layout() {
        let rec = classify_text("::1");
        let zeros: &str = "0000000000000000";
        assert_eq!(
            rec.binary,
            format!("{z}:{z}:{z}:{z}:{z}:{z}:{z}:0000000000000001", z = zeros)
        );
    }
}
