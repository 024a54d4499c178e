// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

// mod.rs
pub(crate) static ERR_NO_FAMILY: &str = "not recognizable as an IPv4 or IPv6 address";
pub(crate) static ERR_BAD_VALUE: &str = "address-shaped input with an out-of-range value";

// v6.rs
pub(crate) static EMBEDDED_V4: &str = "Embedded IPv4";
pub(crate) static NOTE_DB8_SHORTHAND: &str =
    "Shorthand spelling of the 2001:db8::/32 documentation prefix";

// v6.rs scope labels
pub(crate) static SCOPE_LINK: &str = "Link";
pub(crate) static SCOPE_ULA: &str = "Global (locally assigned)";
