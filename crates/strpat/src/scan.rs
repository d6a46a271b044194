// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy per-match scanning.

use std::sync::Arc;

use regex::Captures;

use crate::pattern::{CompiledPattern, GroupKind, advance};

/// Iterator over per-match capture groupings.
///
/// Each item holds one entry per visible capture group in declaration
/// order, or a single entry with the whole match when the pattern has
/// no capture groups. Groups that did not participate in a match yield
/// `None`. The sequence is finite and lazy; build a new `Scan` to
/// restart it. In right-to-left mode the matches are pre-collected and
/// replayed in reverse.
#[derive(Debug)]
pub struct Scan<'h> {
    pattern: Arc<CompiledPattern>,
    subject: &'h str,
    pos: usize,
    finished: bool,
    buffered: Option<std::vec::IntoIter<Vec<Option<&'h str>>>>,
}

impl<'h> Scan<'h> {
    pub(crate) fn new(pattern: Arc<CompiledPattern>, subject: &'h str) -> Self {
        let mut scan = Self { pattern, subject, pos: 0, finished: false, buffered: None };
        if scan.pattern.options().right_to_left {
            let mut items: Vec<_> = std::iter::from_fn(|| scan.next_forward()).collect();
            items.reverse();
            scan.buffered = Some(items.into_iter());
        }
        scan
    }

    fn next_forward(&mut self) -> Option<Vec<Option<&'h str>>> {
        if self.finished || self.pos > self.subject.len() {
            return None;
        }
        let Some(caps) = self.pattern.regex().captures_at(self.subject, self.pos) else {
            self.finished = true;
            return None;
        };
        let Some(whole) = caps.get(0) else {
            self.finished = true;
            return None;
        };
        let item = self.item(&caps);
        match advance(self.subject, whole.start(), whole.end()) {
            Some(next) => self.pos = next,
            None => self.finished = true,
        }
        Some(item)
    }

    fn item(&self, caps: &Captures<'h>) -> Vec<Option<&'h str>> {
        if self.pattern.visible_groups() == 0 {
            return vec![caps.get(0).map(|m| m.as_str())];
        }
        self.pattern
            .groups()
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, kind)| **kind != GroupKind::Skipped)
            .map(|(index, _)| caps.get(index).map(|m| m.as_str()))
            .collect()
    }
}

impl<'h> Iterator for Scan<'h> {
    type Item = Vec<Option<&'h str>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(buffered) = &mut self.buffered {
            return buffered.next();
        }
        self.next_forward()
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
