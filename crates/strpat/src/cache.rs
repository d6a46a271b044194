// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide compiled-pattern cache.
//!
//! Every string operation resolves its matcher here rather than
//! compiling directly, so each distinct (pattern, options) pair is
//! compiled effectively once per process. Entries are never evicted;
//! the map grows by at most one entry per distinct pair ever requested
//! and stops being referenced at process exit.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::options::Options;
use crate::pattern::{CompiledPattern, PatternError};

/// Cache key: pattern text plus the normalized flag set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: Box<str>,
    options: Options,
}

/// Concurrency-safe mapping from (pattern, options) to a compiled
/// matcher.
///
/// Lookups take only a shard read lock. A miss compiles outside the
/// map locks and installs with insert-if-absent: when two callers race
/// on the same key, one transient duplicate compile is possible, but
/// exactly one value stays resident and all subsequent calls observe
/// it. Failed compilations are never cached.
pub struct PatternCache {
    map: DashMap<CacheKey, Arc<CompiledPattern>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { map: DashMap::new() }
    }

    /// Return the matcher for (pattern, options), compiling it on first
    /// use.
    ///
    /// # Errors
    ///
    /// [`PatternError::Syntax`] when the pattern text is not a valid
    /// expression under the given options. The failure is not cached,
    /// so a later call with the same key re-attempts compilation.
    pub fn get_or_compile(
        &self,
        pattern: &str,
        options: Options,
    ) -> Result<Arc<CompiledPattern>, PatternError> {
        let key = CacheKey { pattern: pattern.into(), options };
        if let Some(hit) = self.map.get(&key) {
            return Ok(Arc::clone(hit.value()));
        }

        tracing::trace!("compiling pattern {:?} with options {:?}", pattern, options);
        let compiled = Arc::new(CompiledPattern::build(pattern, options)?);

        match self.map.entry(key) {
            Entry::Occupied(entry) => {
                // Lost the race; keep the resident value.
                tracing::trace!("discarding duplicate compile of {:?}", pattern);
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => Ok(Arc::clone(entry.insert(compiled).value())),
        }
    }

    /// Number of compiled patterns resident in the cache.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

/// The process-wide cache backing the string API.
pub fn global() -> &'static PatternCache {
    &GLOBAL
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
