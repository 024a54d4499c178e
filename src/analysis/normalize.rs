// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{ParseError, GROUPS};

static MARKER: &str = "::";

/**
Expand IPv6 text into its 8 numeric groups.

Handles the `::` compression marker: the text is split into a left and a
right segment around the marker, each segment is tokenized by `:` with
empty tokens discarded, and `8 - (left + right)` all-zero groups are
implied in between. Without the marker, exactly 8 tokens are required.

Rejects text containing more than one marker (ambiguous), more than 8
explicit groups, or any token that is not 0-4 hex digits.
*/
pub fn expand(text: &str) -> Result<[u16; GROUPS], ParseError> {
    let lower: String = text.trim().to_ascii_lowercase();
    let mut groups: Vec<u16> = Vec::with_capacity(GROUPS);

    if let Some(marker) = lower.find(MARKER) {
        if lower[marker + MARKER.len()..].contains(MARKER) {
            return Err(ParseError::InvalidFormat(text.into()));
        }

        let left: Vec<&str> = tokenize(&lower[..marker]);
        let right: Vec<&str> = tokenize(&lower[marker + MARKER.len()..]);
        if left.len() + right.len() > GROUPS {
            return Err(ParseError::MalformedValue(text.into()));
        }

        let implied: usize = GROUPS - left.len() - right.len();
        for tok in left {
            groups.push(parse_group(tok, text)?);
        }
        groups.extend(std::iter::repeat(0).take(implied));
        for tok in right {
            groups.push(parse_group(tok, text)?);
        }
    } else {
        let tokens: Vec<&str> = lower.split(':').collect();
        if tokens.len() != GROUPS {
            return Err(ParseError::MalformedValue(text.into()));
        }
        for tok in tokens {
            groups.push(parse_group(tok, text)?);
        }
    }

    let mut out = [0u16; GROUPS];
    out.copy_from_slice(&groups);
    Ok(out)
}

/// Canonical text form: fully expanded, zero-padded, lower-case.
pub fn canonical(groups: &[u16; GROUPS]) -> String {
    let padded: Vec<String> = groups.iter().map(|g| format!("{g:04x}")).collect();
    padded.join(":")
}

/**
Reverse shorthand: compress the longest run of two or more zero groups
into `::` (leftmost run on a tie) and strip leading zeros from every
group, per RFC 5952. A lone zero group is written as `0`, not `::`.
*/
pub fn compress(groups: &[u16; GROUPS]) -> String {
    let (mut best_at, mut best_len) = (0usize, 0usize);
    let (mut run_at, mut run_len) = (0usize, 0usize);

    for (i, g) in groups.iter().enumerate() {
        if *g == 0 {
            if run_len == 0 {
                run_at = i;
            }
            run_len += 1;
            if run_len > best_len {
                best_at = run_at;
                best_len = run_len;
            }
        } else {
            run_len = 0;
        }
    }

    if best_len < 2 {
        let short: Vec<String> = groups.iter().map(|g| format!("{g:x}")).collect();
        return short.join(":");
    }

    let left: Vec<String> = groups[..best_at].iter().map(|g| format!("{g:x}")).collect();
    let right: Vec<String> = groups[best_at + best_len..]
        .iter()
        .map(|g| format!("{g:x}"))
        .collect();
    format!("{}{MARKER}{}", left.join(":"), right.join(":"))
}

/* ---------------------------------- */

fn tokenize(segment: &str) -> Vec<&str> {
    segment.split(':').filter(|tok| !tok.is_empty()).collect()
}

fn parse_group(token: &str, original: &str) -> Result<u16, ParseError> {
    if token.is_empty() {
        // "1:2:3:4:5:6:7:" style input; an absent group reads as zero
        return Ok(0);
    }
    if token.len() > 4 {
        return Err(ParseError::MalformedValue(original.into()));
    }
    u16::from_str_radix(token, 16).map_err(|_| ParseError::InvalidFormat(original.into()))
}

/* -------------------------------------------------------------------------- */
