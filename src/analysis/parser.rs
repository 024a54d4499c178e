// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{normalize, structs::IpFam, ParseError};
use lazy_static::lazy_static;
use regex::Regex;

// Family detection grammars, compiled once per program execution.
lazy_static! {
    /// exactly four dot-separated decimal groups
    static ref IPV4_SHAPE: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("IPv4 grammar");
    /// exactly eight colon-separated groups of 0-4 hex digits (no `::`)
    static ref IPV6_SHAPE: Regex =
        Regex::new(r"^([0-9a-fA-F]{0,4}:){7}[0-9a-fA-F]{0,4}$").expect("IPv6 grammar");
}

/// An address decomposed into its numeric form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParsedAddress {
    V4([u8; 4]),
    V6([u16; 8]),
}

impl ParsedAddress {
    pub fn fam(&self) -> IpFam {
        match self {
            ParsedAddress::V4(_) => IpFam::V4,
            ParsedAddress::V6(_) => IpFam::V6,
        }
    }
}

/**
Decide the address family of `text` and decompose it.

IPv4 requires the four-group dotted-decimal shape with every octet in
0-255; a shape-matching string with an octet above 255 is rejected, not
clamped. IPv6 requires either the `::` compression marker or exactly 8
colon-separated hex groups; the expansion in [normalize::expand] performs
the remaining validation.
*/
pub fn parse(text: &str) -> Result<ParsedAddress, ParseError> {
    let text: &str = text.trim();

    if let Some(caps) = IPV4_SHAPE.captures(text) {
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let val: u32 = caps[i + 1]
                .parse()
                .map_err(|_| ParseError::MalformedValue(text.into()))?;
            if val > u8::MAX as u32 {
                return Err(ParseError::MalformedValue(text.into()));
            }
            *octet = val as u8;
        }
        return Ok(ParsedAddress::V4(octets));
    }

    if text.contains("::") || IPV6_SHAPE.is_match(text) {
        return normalize::expand(text).map(ParsedAddress::V6);
    }

    Err(ParseError::InvalidFormat(text.into()))
}

/* -------------------------------------------------------------------------- */
