// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simplified capture collections.
//!
//! A [`MatchData`] flattens one or more engine matches into two
//! namespaces: numbered captures in scan order (group 0, the whole
//! match, always first per match) and named captures in declaration
//! order. A group captured repeatedly within a single match keeps only
//! its last value; a name seen in a later match overwrites the earlier
//! value under that name.

use regex::Captures;

use crate::pattern::{CompiledPattern, GroupKind, PatternError};

#[derive(Debug, Clone, Copy)]
struct Capture<'h> {
    text: &'h str,
    start: usize,
    end: usize,
}

/// Captures collected from applying a pattern to a subject.
///
/// Borrows the subject; holds no reference to the cache or the
/// compiled matcher.
#[derive(Debug, Clone, Default)]
pub struct MatchData<'h> {
    numbered: Vec<Capture<'h>>,
    named: Vec<(Box<str>, Capture<'h>)>,
}

impl<'h> MatchData<'h> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fold one engine match into the collection.
    pub(crate) fn push_match(&mut self, pattern: &CompiledPattern, caps: &Captures<'h>) {
        for (index, kind) in pattern.groups().iter().enumerate() {
            let capture = match caps.get(index) {
                Some(m) => Capture { text: m.as_str(), start: m.start(), end: m.end() },
                // Group did not participate in this match.
                None => Capture { text: "", start: 0, end: 0 },
            };
            match kind {
                GroupKind::Numbered => self.numbered.push(capture),
                GroupKind::Named(name) => self.set_named(name, capture),
                GroupKind::Skipped => {}
            }
        }
    }

    fn set_named(&mut self, name: &str, capture: Capture<'h>) {
        if let Some(slot) = self.named.iter_mut().find(|(n, _)| **n == *name) {
            slot.1 = capture;
        } else {
            self.named.push((name.into(), capture));
        }
    }

    fn numbered_capture(&self, index: usize) -> Result<&Capture<'h>, PatternError> {
        self.numbered
            .get(index)
            .ok_or(PatternError::IndexOutOfRange { index, count: self.numbered.len() })
    }

    fn named_capture(&self, name: &str) -> Option<&Capture<'h>> {
        self.named.iter().find(|(n, _)| **n == *name).map(|(_, c)| c)
    }

    /// A numbered capture value. Index 0 is the whole match.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when the index does not exist.
    pub fn group(&self, index: usize) -> Result<&'h str, PatternError> {
        Ok(self.numbered_capture(index)?.text)
    }

    /// A named capture value, or `None` when the name is absent.
    pub fn named(&self, name: &str) -> Option<&'h str> {
        Some(self.named_capture(name)?.text)
    }

    /// Byte offset where a numbered capture begins.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when the index does not exist.
    pub fn begin(&self, index: usize) -> Result<usize, PatternError> {
        Ok(self.numbered_capture(index)?.start)
    }

    /// Byte offset just past the end of a numbered capture.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when the index does not exist.
    pub fn end(&self, index: usize) -> Result<usize, PatternError> {
        Ok(self.numbered_capture(index)?.end)
    }

    /// Byte offset where a named capture begins, `None` when absent.
    pub fn named_begin(&self, name: &str) -> Option<usize> {
        Some(self.named_capture(name)?.start)
    }

    /// Byte offset just past the end of a named capture, `None` when
    /// absent.
    pub fn named_end(&self, name: &str) -> Option<usize> {
        Some(self.named_capture(name)?.end)
    }

    /// Capture names present, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.iter().map(|(name, _)| name.as_ref())
    }

    /// Total number of captures, numbered plus named.
    pub fn len(&self) -> usize {
        self.numbered.len() + self.named.len()
    }

    /// Whether no captures were collected (the pattern never matched).
    pub fn is_empty(&self) -> bool {
        self.numbered.is_empty() && self.named.is_empty()
    }

    /// Every capture value: numbered captures first, then named.
    pub fn iter(&self) -> impl Iterator<Item = &'h str> {
        self.numbered
            .iter()
            .map(|c| c.text)
            .chain(self.named.iter().map(|(_, c)| c.text))
    }
}

#[cfg(test)]
#[path = "match_data_tests.rs"]
mod tests;
