// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

mod analysis;

pub use analysis::{
    cache_size, canonical, classify, compress, expand, parse, AddrKind, Citation,
    ClassificationRecord, IpFam, LegacyClass, ParseError, ParsedAddress, Translation,
    TranslationBundle,
};
