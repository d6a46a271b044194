// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and capture-group classification.

use regex::{Regex, RegexBuilder};

use crate::options::Options;

/// Errors surfaced by pattern operations.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern text is not a valid expression under the requested
    /// options. Never cached; re-attempted compilation re-raises.
    #[error("invalid pattern syntax: {0}")]
    Syntax(#[from] regex::Error),

    /// A numbered capture (or its position) that does not exist was
    /// requested.
    #[error("capture index {index} out of range ({count} captures)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A start offset past the end of the subject, or off a character
    /// boundary.
    #[error("offset {offset} out of range for subject of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// An option character outside the recognized set, from
    /// [`Options::parse_strict`](crate::Options::parse_strict) only.
    #[error("unrecognized option character {option:?}")]
    InvalidOption { option: char },
}

/// How a capture group contributes to a [`MatchData`](crate::MatchData).
///
/// Decided once per group when the pattern is built: a group with an
/// absent or purely numeric declared name is an implicit index, a group
/// with a symbolic name is named, and in explicit-capture mode unnamed
/// groups are skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GroupKind {
    Numbered,
    Named(Box<str>),
    Skipped,
}

/// An immutable, engine-compiled matcher plus its capture
/// classification, shared read-only through the cache.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    options: Options,
    groups: Vec<GroupKind>,
    visible_groups: usize,
}

impl CompiledPattern {
    /// Compile a pattern without consulting any cache.
    pub fn build(pattern: &str, options: Options) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.ignore_case)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_newline)
            .ignore_whitespace(options.ignore_whitespace)
            .build()?;

        let groups = classify_groups(&regex, options.explicit_capture);
        let visible_groups = groups
            .iter()
            .skip(1)
            .filter(|kind| **kind != GroupKind::Skipped)
            .count();

        Ok(Self { regex, options, groups, visible_groups })
    }

    /// The pattern text this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The options this matcher was compiled with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Named groups as `(name, group index)` pairs, in declaration order.
    pub fn named_groups(&self) -> impl Iterator<Item = (&str, usize)> {
        self.groups.iter().enumerate().filter_map(|(index, kind)| match kind {
            GroupKind::Named(name) => Some((name.as_ref(), index)),
            _ => None,
        })
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Classification for every engine group, index 0 included.
    pub(crate) fn groups(&self) -> &[GroupKind] {
        &self.groups
    }

    /// Capture groups beyond the whole match that surface in results.
    pub(crate) fn visible_groups(&self) -> usize {
        self.visible_groups
    }
}

fn classify_groups(regex: &Regex, explicit_capture: bool) -> Vec<GroupKind> {
    regex
        .capture_names()
        .enumerate()
        .map(|(index, name)| match name {
            Some(name) if name.parse::<u32>().is_err() => GroupKind::Named(name.into()),
            Some(_) => GroupKind::Numbered,
            None if index > 0 && explicit_capture => GroupKind::Skipped,
            None => GroupKind::Numbered,
        })
        .collect()
}

/// Next search position after a match at `start..end`, stepping one
/// character past empty matches. `None` means the scan is finished.
pub(crate) fn advance(subject: &str, start: usize, end: usize) -> Option<usize> {
    if start < end {
        return Some(end);
    }
    subject[end..].chars().next().map(|c| end + c.len_utf8())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
