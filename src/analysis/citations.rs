// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;

/// A pointer into the RFC series: document number, optional section
/// anchor (e.g. `section-2.5.2` or `appendix-A`) and the document title.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Citation {
    pub rfc: u16,
    pub section: Option<&'static str>,
    pub title: &'static str,
}

impl Citation {
    pub(crate) const fn new(rfc: u16, title: &'static str) -> Self {
        Self {
            rfc,
            section: None,
            title,
        }
    }

    pub(crate) const fn at(rfc: u16, section: &'static str, title: &'static str) -> Self {
        Self {
            rfc,
            section: Some(section),
            title,
        }
    }

    /// Hyperlink form used by rendering layers.
    pub fn url(&self) -> String {
        match self.section {
            Some(section) => format!("https://www.rfc-editor.org/rfc/rfc{}.html#{section}", self.rfc),
            None => format!("https://www.rfc-editor.org/rfc/rfc{}.html", self.rfc),
        }
    }
}

const ADDR_ARCH_TITLE: &str = "IP Version 6 Addressing Architecture";

/// RFC 4291 with a section anchor. Cited from most IPv6 branches.
pub(crate) const fn addr_arch(section: &'static str) -> Citation {
    Citation::at(4291, section, ADDR_ARCH_TITLE)
}

pub(crate) const ADDR_ARCH: Citation = Citation::new(4291, ADDR_ARCH_TITLE);
pub(crate) const ADDR_ARCH_OLD: Citation =
    Citation::new(3513, "Internet Protocol Version 6 (IPv6) Addressing Architecture");

// IPv4 registry documents
pub(crate) const HOST_REQUIREMENTS: Citation =
    Citation::at(1122, "section-3.2.1.3", "Requirements for Internet Hosts");
pub(crate) const SPECIAL_REGISTRIES: Citation =
    Citation::new(6890, "Special-Purpose IP Address Registries");
pub(crate) const BROADCAST: Citation = Citation::new(919, "Broadcasting Internet Datagrams");
pub(crate) const BROADCAST_SUBNETS: Citation =
    Citation::new(922, "Broadcasting Internet Datagrams in the Presence of Subnets");
pub(crate) const PRIVATE_USE: Citation =
    Citation::new(1918, "Address Allocation for Private Internets");
pub(crate) const V4_LINK_LOCAL: Citation =
    Citation::new(3927, "Dynamic Configuration of IPv4 Link-Local Addresses");
pub(crate) const SHARED_SPACE: Citation =
    Citation::new(6598, "IANA-Reserved IPv4 Prefix for Shared Address Space");
pub(crate) const V4_DOCUMENTATION: Citation =
    Citation::new(5737, "IPv4 Address Blocks Reserved for Documentation");
pub(crate) const BENCHMARKING_V4: Citation =
    Citation::new(2544, "Benchmarking Methodology for Network Interconnect Devices");
pub(crate) const MULTICAST_GUIDELINES: Citation =
    Citation::new(5771, "IANA Guidelines for IPv4 Multicast Address Assignments");
pub(crate) const HOST_MULTICAST: Citation =
    Citation::at(1112, "section-4", "Host Extensions for IP Multicasting");
pub(crate) const SSM: Citation = Citation::new(4607, "Source-Specific Multicast for IP");
pub(crate) const GLOP: Citation = Citation::new(3180, "GLOP Addressing in 233/8");
pub(crate) const ADMIN_SCOPED: Citation =
    Citation::new(2365, "Administratively Scoped IP Multicast");

// IPv6 registry documents
pub(crate) const SLAAC: Citation = Citation::new(4862, "IPv6 Stateless Address Autoconfiguration");
pub(crate) const UNICAST_PREFIX_MCAST: Citation =
    Citation::new(3306, "Unicast-Prefix-based IPv6 Multicast Addresses");
pub(crate) const EMBEDDED_RP: Citation = Citation::new(
    3956,
    "Embedding the Rendezvous Point (RP) Address in an IPv6 Multicast Address",
);
pub(crate) const V6_DOCUMENTATION: Citation =
    Citation::new(3849, "IPv6 Address Prefix Reserved for Documentation");
pub(crate) const SIX_TO_FOUR: Citation =
    Citation::new(3056, "Connection of IPv6 Domains via IPv4 Clouds");
pub(crate) const TEREDO: Citation =
    Citation::new(4380, "Teredo: Tunneling IPv6 over UDP through NATs");
pub(crate) const BENCHMARKING_V6: Citation = Citation::new(
    5180,
    "IPv6 Benchmarking Methodology for Network Interconnect Devices",
);
pub(crate) const ORCHID: Citation = Citation::new(
    4843,
    "An IPv6 Prefix for Overlay Routable Cryptographic Hash Identifiers (ORCHID)",
);
pub(crate) const ORCHID_V2: Citation = Citation::new(
    7343,
    "An IPv6 Prefix for Overlay Routable Cryptographic Hash Identifiers Version 2 (ORCHIDv2)",
);
pub(crate) const ULA: Citation = Citation::new(4193, "Unique Local IPv6 Unicast Addresses");
pub(crate) const REGISTRY_UPDATES: Citation =
    Citation::new(8190, "Updates to the Special-Purpose IP Address Registries");
pub(crate) const NAT64: Citation = Citation::new(6052, "IPv6 Addressing of IPv4/IPv6 Translators");

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_section() {
        assert_eq!(PRIVATE_USE.url(), "https://www.rfc-editor.org/rfc/rfc1918.html");
    }

    #[test]
    fn test_url_with_section() {
        assert_eq!(
            HOST_REQUIREMENTS.url(),
            "https://www.rfc-editor.org/rfc/rfc1122.html#section-3.2.1.3"
        );
        assert_eq!(
            addr_arch("appendix-A").url(),
            "https://www.rfc-editor.org/rfc/rfc4291.html#appendix-A"
        );
    }
}
