// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::structs::ClassificationRecord;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

// Process-wide memoization of classification results, keyed by
// "<family>:<exact input text>". Unbounded, no eviction: records are
// small and realistic input cardinality is tiny (interactive use).
// Revisit before reusing this in a high-traffic service.
lazy_static! {
    static ref RESULTS: RwLock<HashMap<String, Arc<ClassificationRecord>>> =
        RwLock::new(HashMap::new());
}

/// Shared handle to a previously computed record, if any.
pub(crate) fn fetch(key: &str) -> Option<Arc<ClassificationRecord>> {
    RESULTS.read().get(key).cloned()
}

/// Store a freshly built record and return the shared handle. If another
/// thread raced us to the same key, its record wins and is returned.
pub(crate) fn store(key: String, record: ClassificationRecord) -> Arc<ClassificationRecord> {
    let fresh: Arc<ClassificationRecord> = Arc::new(record);
    let mut map = RESULTS.write();
    map.entry(key).or_insert(fresh).clone()
}

/// Number of memoized records. Diagnostic only.
pub fn cache_size() -> usize {
    RESULTS.read().len()
}

/* -------------------------------------------------------------------------- */
