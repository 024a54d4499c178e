// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::citations::Citation;
use serde::{Serialize, Serializer};
use std::fmt;

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IpFam {
    V4,
    V6,
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => write!(f, "v4"),
            IpFam::V6 => write!(f, "v6"),
        }
    }
}

impl Serialize for IpFam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            IpFam::V4 => 4,
            IpFam::V6 => 6,
        })
    }
}

/* -------------------------------------------------------------------------- */

/// Primary classification of an address. Closed set; rendered via [fmt::Display].
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddrKind {
    GlobalUnicast,
    // IPv4 special-purpose
    ThisHost,
    ThisNetwork,
    LimitedBroadcast,
    Loopback,
    PrivateUse,
    LinkLocal,
    SharedAddressSpace,
    IetfProtocolAssignments,
    Documentation,
    Benchmarking,
    Multicast,
    Reserved,
    // IPv6-only
    Unspecified,
    Ipv4Mapped,
    SixToFour,
    Teredo,
    Orchid,
    OrchidV2,
    UniqueLocal,
    Nat64,
    ReservedIetf,
}

impl AddrKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddrKind::GlobalUnicast => "Global Unicast",
            AddrKind::ThisHost => "This host on this network",
            AddrKind::ThisNetwork => "This network",
            AddrKind::LimitedBroadcast => "Limited Broadcast",
            AddrKind::Loopback => "Loopback",
            AddrKind::PrivateUse => "Private-Use",
            AddrKind::LinkLocal => "Link-Local",
            AddrKind::SharedAddressSpace => "Shared Address Space",
            AddrKind::IetfProtocolAssignments => "IETF Protocol Assignments",
            AddrKind::Documentation => "Documentation",
            AddrKind::Benchmarking => "Benchmarking",
            AddrKind::Multicast => "Multicast",
            AddrKind::Reserved => "Reserved",
            AddrKind::Unspecified => "Unspecified",
            AddrKind::Ipv4Mapped => "IPv4-Mapped",
            AddrKind::SixToFour => "6to4",
            AddrKind::Teredo => "Teredo",
            AddrKind::Orchid => "ORCHID",
            AddrKind::OrchidV2 => "ORCHIDv2",
            AddrKind::UniqueLocal => "Unique Local",
            AddrKind::Nat64 => "IPv4-IPv6 Translation",
            AddrKind::ReservedIetf => "Reserved by IETF",
        }
    }
}

impl fmt::Display for AddrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AddrKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/* -------------------------------------------------------------------------- */

/// Historical class of an IPv4 address by its leading bits (pre-CIDR).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LegacyClass {
    A,
    B,
    C,
    D,
    E,
}

impl LegacyClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyClass::A => "Class A (Legacy)",
            LegacyClass::B => "Class B (Legacy)",
            LegacyClass::C => "Class C (Legacy)",
            LegacyClass::D => "Class D (Multicast)",
            LegacyClass::E => "Class E (Reserved)",
        }
    }
}

impl fmt::Display for LegacyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for LegacyClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/* -------------------------------------------------------------------------- */

/// One IPv6 spelling of an IPv4 address.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Translation {
    /// fully hexadecimal form, e.g. `::ffff:c0a8:0101`
    pub hex: String,
    /// mixed-notation form with a trailing dotted quad, where customary
    pub mixed: Option<String>,
    /// the mechanism has been deprecated by the IETF
    pub deprecated: bool,
    pub citation: Citation,
}

/// The standard IPv6 representations embedding an IPv4 address.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TranslationBundle {
    pub mapped: Translation,
    pub compatible: Translation,
    pub six_to_four: Translation,
    pub well_known: Translation,
}

/* -------------------------------------------------------------------------- */

/**
The externally visible result of classifying one textual address.

Constructed atomically by the classification pipeline, then cached and
shared; never mutated afterwards. IPv4-only and IPv6-only fields are
`None` for the other family.
*/
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ClassificationRecord {
    pub fam: IpFam,
    /// original (trimmed) input text
    pub address: String,
    /// fully expanded, zero-padded, lower-case form (IPv6 only)
    pub canonical: Option<String>,
    pub kind: AddrKind,
    pub legacy_class: Option<LegacyClass>,
    pub scope: Option<&'static str>,
    pub notes: Vec<String>,
    pub citations: Vec<Citation>,
    /// per-octet (v4) or per-group (v6) binary layout
    pub binary: String,
    /// big-endian 32-bit value (IPv4 only)
    pub decimal: Option<u32>,
    /// colon-joined byte hex, e.g. `c0:a8:01:01` (IPv4 only)
    pub hex: Option<String>,
    /// dotted-decimal address recovered from the bit pattern (IPv6 only)
    pub embedded_ipv4: Option<String>,
    /// hardware address recovered from a Modified EUI-64 identifier (IPv6 only)
    pub mac_address: Option<String>,
    /// IPv6 spellings of this IPv4 address (IPv4 only)
    pub translations: Option<TranslationBundle>,
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fam_display() {
        assert_eq!(IpFam::V4.to_string(), "v4");
        assert_eq!(IpFam::V6.to_string(), "v6");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(AddrKind::ThisHost.to_string(), "This host on this network");
        assert_eq!(AddrKind::SixToFour.to_string(), "6to4");
        assert_eq!(AddrKind::Nat64.to_string(), "IPv4-IPv6 Translation");
    }

    #[test]
    fn test_legacy_labels() {
        assert_eq!(LegacyClass::A.to_string(), "Class A (Legacy)");
        assert_eq!(LegacyClass::D.to_string(), "Class D (Multicast)");
        assert_eq!(LegacyClass::E.to_string(), "Class E (Reserved)");
    }
}
