// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    citations::{self, Citation},
    structs::{AddrKind, ClassificationRecord, IpFam, LegacyClass},
    translate,
};

struct Outcome {
    kind: AddrKind,
    notes: Vec<String>,
    citations: Vec<Citation>,
}

/// One special-purpose range: a predicate over the octets and the
/// complete outcome it yields. Evaluated in order, first match wins.
struct SpecialRule {
    matches: fn(&[u8; 4]) -> bool,
    build: fn(&[u8; 4]) -> Outcome,
}

#[rustfmt::skip]
static SPECIAL: &[SpecialRule] = &[
    SpecialRule {
        matches: |o| o == &[0, 0, 0, 0],
        build: |_| Outcome {
            kind: AddrKind::ThisHost,
            notes: vec![
                "Can only be used as a source address".into(),
                "Indicates the absence of an address".into(),
            ],
            citations: vec![citations::HOST_REQUIREMENTS, citations::SPECIAL_REGISTRIES],
        },
    },
    SpecialRule {
        matches: |o| o[0] == 0,
        build: |_| Outcome {
            kind: AddrKind::ThisNetwork,
            notes: vec!["Addresses from 0.0.0.0/8 (except 0.0.0.0/32)".into()],
            citations: vec![citations::SPECIAL_REGISTRIES],
        },
    },
    SpecialRule {
        matches: |o| o == &[255, 255, 255, 255],
        build: |_| Outcome {
            kind: AddrKind::LimitedBroadcast,
            notes: vec!["Broadcast to all hosts on the local network segment".into()],
            citations: vec![citations::BROADCAST, citations::BROADCAST_SUBNETS],
        },
    },
    SpecialRule {
        matches: |o| o[0] == 127,
        build: |_| Outcome {
            kind: AddrKind::Loopback,
            notes: vec![
                "Internal host loopback addresses (127.0.0.0/8)".into(),
                "Packets never leave the host".into(),
            ],
            citations: vec![citations::HOST_REQUIREMENTS],
        },
    },
    SpecialRule {
        matches: |o| o[0] == 10,
        build: |_| private_use("Private-Use networks (10.0.0.0/8)"),
    },
    SpecialRule {
        matches: |o| o[0] == 172 && (16..=31).contains(&o[1]),
        build: |_| private_use("Private-Use networks (172.16.0.0/12)"),
    },
    SpecialRule {
        matches: |o| o[0] == 192 && o[1] == 168,
        build: |_| private_use("Private-Use networks (192.168.0.0/16)"),
    },
    SpecialRule {
        matches: |o| o[0] == 169 && o[1] == 254,
        build: |_| Outcome {
            kind: AddrKind::LinkLocal,
            notes: vec![
                "Link-Local addresses (169.254.0.0/16)".into(),
                "Used for automatic private IP addressing (APIPA)".into(),
            ],
            citations: vec![citations::V4_LINK_LOCAL],
        },
    },
    SpecialRule {
        matches: |o| o[0] == 100 && (64..=127).contains(&o[1]),
        build: |_| Outcome {
            kind: AddrKind::SharedAddressSpace,
            notes: vec!["Carrier-Grade NAT (100.64.0.0/10)".into()],
            citations: vec![citations::SHARED_SPACE],
        },
    },
    SpecialRule {
        matches: |o| o[0] == 192 && o[1] == 0 && o[2] == 0,
        build: |_| Outcome {
            kind: AddrKind::IetfProtocolAssignments,
            notes: vec!["IETF Protocol Assignments (192.0.0.0/24)".into()],
            citations: vec![citations::SPECIAL_REGISTRIES],
        },
    },
    SpecialRule {
        matches: |o| o[0] == 192 && o[1] == 0 && o[2] == 2,
        build: |_| documentation("Documentation (TEST-NET-1) (192.0.2.0/24)"),
    },
    SpecialRule {
        matches: |o| o[0] == 198 && o[1] == 51 && o[2] == 100,
        build: |_| documentation("Documentation (TEST-NET-2) (198.51.100.0/24)"),
    },
    SpecialRule {
        matches: |o| o[0] == 203 && o[1] == 0 && o[2] == 113,
        build: |_| documentation("Documentation (TEST-NET-3) (203.0.113.0/24)"),
    },
    SpecialRule {
        // 198.18.0.0/15 covers second octets 18 and 19
        matches: |o| o[0] == 198 && (o[1] & 0xfe) == 18,
        build: |_| Outcome {
            kind: AddrKind::Benchmarking,
            notes: vec!["Network Interconnect Device Benchmarking (198.18.0.0/15)".into()],
            citations: vec![citations::BENCHMARKING_V4],
        },
    },
];

fn private_use(note: &str) -> Outcome {
    Outcome {
        kind: AddrKind::PrivateUse,
        notes: vec![note.into()],
        citations: vec![citations::PRIVATE_USE],
    }
}

fn documentation(note: &str) -> Outcome {
    Outcome {
        kind: AddrKind::Documentation,
        notes: vec![note.into()],
        citations: vec![citations::V4_DOCUMENTATION],
    }
}

/* -------------------------------------------------------------------------- */

/// Historical class by the top bits of the first octet. Always computed,
/// independent of any special-purpose match.
fn legacy(octet0: u8) -> (LegacyClass, Outcome) {
    if octet0 & 0x80 == 0 {
        (
            LegacyClass::A,
            base_outcome(AddrKind::GlobalUnicast, "Historical Class A (0.0.0.0 - 127.255.255.255)", None),
        )
    } else if octet0 & 0xc0 == 0x80 {
        (
            LegacyClass::B,
            base_outcome(AddrKind::GlobalUnicast, "Historical Class B (128.0.0.0 - 191.255.255.255)", None),
        )
    } else if octet0 & 0xe0 == 0xc0 {
        (
            LegacyClass::C,
            base_outcome(AddrKind::GlobalUnicast, "Historical Class C (192.0.0.0 - 223.255.255.255)", None),
        )
    } else if octet0 & 0xf0 == 0xe0 {
        (
            LegacyClass::D,
            base_outcome(
                AddrKind::Multicast,
                "Multicast (224.0.0.0 - 239.255.255.255)",
                Some(citations::MULTICAST_GUIDELINES),
            ),
        )
    } else {
        (
            LegacyClass::E,
            base_outcome(
                AddrKind::Reserved,
                "Reserved for Future Use (240.0.0.0 - 255.255.255.255)",
                Some(citations::HOST_MULTICAST),
            ),
        )
    }
}

fn base_outcome(kind: AddrKind, note: &str, citation: Option<Citation>) -> Outcome {
    Outcome {
        kind,
        notes: vec![note.into()],
        citations: citation.into_iter().collect(),
    }
}

/// Finer multicast sub-blocks within 224.0.0.0/4, appended to the class
/// notes when no special-purpose rule overrode them.
fn multicast_subblock(octets: &[u8; 4]) -> Option<(Vec<String>, Vec<Citation>)> {
    match octets {
        [224, 0, 0, _] => Some((
            vec![
                "Local Network Control Block (224.0.0.0/24)".into(),
                "TTL/Hop Limit = 1, not forwarded by routers".into(),
            ],
            vec![citations::MULTICAST_GUIDELINES],
        )),
        [224, 0, 1, _] => Some((
            vec!["Internetwork Control Block (224.0.1.0/24)".into()],
            vec![citations::MULTICAST_GUIDELINES],
        )),
        [232, ..] => Some((
            vec!["Source-Specific Multicast (232.0.0.0/8)".into()],
            vec![citations::SSM],
        )),
        [233, second, ..] => {
            let mut notes: Vec<String> = vec!["GLOP Block (233.0.0.0/8)".into()];
            let mut cites: Vec<Citation> = vec![citations::GLOP];
            if *second >= 252 {
                notes.push("AD-HOC Block III (233.252.0.0/14)".into());
                cites.push(citations::MULTICAST_GUIDELINES);
            }
            Some((notes, cites))
        }
        [239, ..] => Some((
            vec!["Administratively Scoped Block (239.0.0.0/8)".into()],
            vec![citations::ADMIN_SCOPED],
        )),
        _ => None,
    }
}

/* -------------------------------------------------------------------------- */

/// Classify 4 validated octets into a complete record.
pub(crate) fn classify(text: &str, octets: [u8; 4]) -> ClassificationRecord {
    let (class, mut outcome) = legacy(octets[0]);

    if let Some(rule) = SPECIAL.iter().find(|r| (r.matches)(&octets)) {
        outcome = (rule.build)(&octets);
    } else if (224..=239).contains(&octets[0]) {
        if let Some((notes, cites)) = multicast_subblock(&octets) {
            outcome.notes.extend(notes);
            outcome.citations.extend(cites);
        }
    }

    ClassificationRecord {
        fam: IpFam::V4,
        address: text.to_string(),
        canonical: None,
        kind: outcome.kind,
        legacy_class: Some(class),
        scope: None,
        notes: outcome.notes,
        citations: outcome.citations,
        binary: binary(&octets),
        decimal: Some(u32::from_be_bytes(octets)),
        hex: Some(colon_hex(&octets)),
        embedded_ipv4: None,
        mac_address: None,
        translations: Some(translate::bundle(&octets)),
    }
}

/// 8-bit zero-padded binary per octet, dot-joined.
fn binary(octets: &[u8; 4]) -> String {
    let parts: Vec<String> = octets.iter().map(|o| format!("{o:08b}")).collect();
    parts.join(".")
}

/// 2-hex-digit bytes, colon-joined.
fn colon_hex(octets: &[u8; 4]) -> String {
    let parts: Vec<String> = octets.iter().map(|o| format!("{o:02x}")).collect();
    parts.join(":")
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_octets(octets: [u8; 4]) -> ClassificationRecord {
        let text: String = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        classify(&text, octets)
    }

    #[test]
    fn test_legacy_class_exhaustive() {
        // every first octet gets exactly one class, no gaps at bit boundaries
        for octet0 in 0u8..=255 {
            let (class, _) = legacy(octet0);
            let expected: LegacyClass = match octet0 {
                0..=127 => LegacyClass::A,
                128..=191 => LegacyClass::B,
                192..=223 => LegacyClass::C,
                224..=239 => LegacyClass::D,
                240..=255 => LegacyClass::E,
            };
            assert_eq!(class, expected, "first octet {octet0}");
        }
    }

    #[test]
    fn test_this_host() {
        let rec = classify_octets([0, 0, 0, 0]);
        assert_eq!(rec.kind, AddrKind::ThisHost);
        assert_eq!(rec.legacy_class, Some(LegacyClass::A));
        assert!(rec.citations.iter().any(|c| c.rfc == 1122 && c.section == Some("section-3.2.1.3")));
        assert!(rec.citations.iter().any(|c| c.rfc == 6890));
        assert_eq!(rec.decimal, Some(0));
    }

    #[test]
    fn test_this_network_beats_zero_class() {
        let rec = classify_octets([0, 1, 2, 3]);
        assert_eq!(rec.kind, AddrKind::ThisNetwork);
    }

    #[test]
    fn test_limited_broadcast() {
        let rec = classify_octets([255, 255, 255, 255]);
        assert_eq!(rec.kind, AddrKind::LimitedBroadcast);
        assert_eq!(rec.legacy_class, Some(LegacyClass::E));
        assert_eq!(rec.decimal, Some(u32::MAX));
    }

    #[test]
    fn test_loopback() {
        let rec = classify_octets([127, 0, 0, 1]);
        assert_eq!(rec.kind, AddrKind::Loopback);
        assert_eq!(rec.legacy_class, Some(LegacyClass::A));
    }

    #[test]
    fn test_private_use_blocks() {
        for octets in [[10, 1, 2, 3], [172, 16, 0, 1], [172, 31, 255, 255], [192, 168, 1, 1]] {
            let rec = classify_octets(octets);
            assert_eq!(rec.kind, AddrKind::PrivateUse, "{octets:?}");
            assert!(rec.citations.iter().any(|c| c.rfc == 1918));
        }
        // just outside 172.16/12
        assert_eq!(classify_octets([172, 32, 0, 1]).kind, AddrKind::GlobalUnicast);
        assert_eq!(classify_octets([172, 15, 0, 1]).kind, AddrKind::GlobalUnicast);
    }

    #[test]
    fn test_scenario_192_168_1_1() {
        let rec = classify_octets([192, 168, 1, 1]);
        assert_eq!(rec.legacy_class, Some(LegacyClass::C));
        let bundle = rec.translations.unwrap();
        assert_eq!(bundle.mapped.mixed.as_deref(), Some("::ffff:192.168.1.1"));
        assert_eq!(rec.decimal, Some(3232235777));
        assert_eq!(rec.hex.as_deref(), Some("c0:a8:01:01"));
        assert_eq!(rec.binary, "11000000.10101000.00000001.00000001");
    }

    #[test]
    fn test_link_local_and_cgnat() {
        assert_eq!(classify_octets([169, 254, 1, 1]).kind, AddrKind::LinkLocal);
        assert_eq!(classify_octets([100, 64, 0, 1]).kind, AddrKind::SharedAddressSpace);
        assert_eq!(classify_octets([100, 127, 255, 1]).kind, AddrKind::SharedAddressSpace);
        // 100.128/9 is ordinary unicast
        assert_eq!(classify_octets([100, 128, 0, 1]).kind, AddrKind::GlobalUnicast);
    }

    #[test]
    fn test_documentation_and_ietf_blocks() {
        assert_eq!(classify_octets([192, 0, 0, 8]).kind, AddrKind::IetfProtocolAssignments);
        for octets in [[192, 0, 2, 1], [198, 51, 100, 7], [203, 0, 113, 99]] {
            assert_eq!(classify_octets(octets).kind, AddrKind::Documentation, "{octets:?}");
        }
    }

    #[test]
    fn test_benchmarking_covers_both_halves() {
        assert_eq!(classify_octets([198, 18, 0, 1]).kind, AddrKind::Benchmarking);
        assert_eq!(classify_octets([198, 19, 255, 1]).kind, AddrKind::Benchmarking);
        assert_eq!(classify_octets([198, 20, 0, 1]).kind, AddrKind::GlobalUnicast);
    }

    #[test]
    fn test_multicast_subblocks() {
        let rec = classify_octets([224, 0, 0, 5]);
        assert_eq!(rec.kind, AddrKind::Multicast);
        assert_eq!(rec.legacy_class, Some(LegacyClass::D));
        assert!(rec.notes.iter().any(|n| n.contains("Local Network Control Block")));

        let rec = classify_octets([224, 0, 1, 1]);
        assert!(rec.notes.iter().any(|n| n.contains("Internetwork Control Block")));

        let rec = classify_octets([232, 5, 6, 7]);
        assert!(rec.notes.iter().any(|n| n.contains("Source-Specific Multicast")));
        assert!(rec.citations.iter().any(|c| c.rfc == 4607));

        let rec = classify_octets([233, 252, 0, 1]);
        assert!(rec.notes.iter().any(|n| n.contains("GLOP Block")));
        assert!(rec.notes.iter().any(|n| n.contains("AD-HOC Block III")));

        let rec = classify_octets([239, 1, 1, 1]);
        assert!(rec.citations.iter().any(|c| c.rfc == 2365));
    }

    #[test]
    fn test_plain_multicast_keeps_class_outcome() {
        let rec = classify_octets([225, 1, 2, 3]);
        assert_eq!(rec.kind, AddrKind::Multicast);
        assert!(rec.citations.iter().any(|c| c.rfc == 5771));
    }

    #[test]
    fn test_class_e_reserved() {
        let rec = classify_octets([240, 0, 0, 1]);
        assert_eq!(rec.kind, AddrKind::Reserved);
        assert_eq!(rec.legacy_class, Some(LegacyClass::E));
    }
}
