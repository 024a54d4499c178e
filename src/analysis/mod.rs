// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4/IPv6 address classification against the IANA special-purpose
//! registries, with derived representations (canonical/binary forms,
//! embedded IPv4/MAC data, inter-version translation spellings).

mod cache;
mod citations;
mod embedded;
mod normalize;
mod parser;
mod strings;
mod structs;
mod translate;
mod v4;
mod v6;

use std::{error, fmt, sync::Arc};
use strings::*;
use tracing::{debug, trace};

pub use cache::cache_size;
pub use citations::Citation;
pub use normalize::{canonical, compress, expand};
pub use parser::{parse, ParsedAddress};
pub use structs::{
    AddrKind, ClassificationRecord, IpFam, LegacyClass, Translation, TranslationBundle,
};

/// number of 16-bit groups in an IPv6 address
pub(crate) const GROUPS: usize = 8;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// input matches neither address family grammar
    InvalidFormat(String),
    /// shaped like an address, but a value is out of bounds
    MalformedValue(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat(text) => {
                write!(f, "{ERR_NO_FAMILY}: '{text}'")
            }
            ParseError::MalformedValue(text) => {
                write!(f, "{ERR_BAD_VALUE}: '{text}'")
            }
        }
    }
}

impl error::Error for ParseError {}

/* -------------------------------------------------------------------------- */

/**
Classify one textual address.

Parses `input` (trimmed), detects the address family, runs the
family-specific classification pipeline and memoizes the result per
exact input text. Repeat calls with the same text hand back the
identical cached record.

Returns `None` when the text is not recognizable as an address of either
family; while a user is still typing this is the normal case, not an
error.
*/
pub fn classify(input: impl AsRef<str>) -> Option<Arc<ClassificationRecord>> {
    let text: &str = input.as_ref().trim();
    if text.is_empty() {
        return None;
    }

    let parsed: ParsedAddress = match parser::parse(text) {
        Ok(parsed) => parsed,
        Err(err) => {
            trace!("no classification: {err}");
            return None;
        }
    };

    let key: String = format!("{}:{text}", parsed.fam());
    if let Some(hit) = cache::fetch(&key) {
        debug!("cache hit for '{text}'");
        return Some(hit);
    }

    let record: ClassificationRecord = match parsed {
        ParsedAddress::V4(octets) => v4::classify(text, octets),
        ParsedAddress::V6(groups) => v6::classify(text, groups),
    };
    debug!("classified '{text}' as {}", record.kind);
    Some(cache::store(key, record))
}

/* -------------------------------------------------------------------------- */
