// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    citations::{self, addr_arch},
    structs::{Translation, TranslationBundle},
};

/// Produce the standard IPv6 spellings that embed the given IPv4 address.
pub(crate) fn bundle(octets: &[u8; 4]) -> TranslationBundle {
    let [a, b, c, d] = *octets;
    let dotted: String = format!("{a}.{b}.{c}.{d}");
    let pair_hi: String = format!("{a:02x}{b:02x}");
    let pair_lo: String = format!("{c:02x}{d:02x}");

    TranslationBundle {
        mapped: Translation {
            hex: format!("::ffff:{pair_hi}:{pair_lo}"),
            mixed: Some(format!("::ffff:{dotted}")),
            deprecated: false,
            citation: addr_arch("section-2.5.5.2"),
        },
        compatible: Translation {
            hex: format!("::{pair_hi}:{pair_lo}"),
            mixed: Some(format!("::{dotted}")),
            deprecated: true,
            citation: addr_arch("section-2.5.5.1"),
        },
        six_to_four: Translation {
            hex: format!("2002:{pair_hi}:{pair_lo}::"),
            mixed: None,
            deprecated: false,
            citation: citations::SIX_TO_FOUR,
        },
        well_known: Translation {
            hex: format!("64:ff9b::{pair_hi}:{pair_lo}"),
            mixed: Some(format!("64:ff9b::{dotted}")),
            deprecated: false,
            citation: citations::NAT64,
        },
    }
}

/* -------------------------------------------------------------------------- */
