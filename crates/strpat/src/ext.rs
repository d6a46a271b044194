// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ruby-flavored pattern operations on `str`.
//!
//! Every operation resolves its matcher through the process-wide
//! [`cache`](crate::cache), so repeated use of the same (pattern,
//! options) pair compiles once. Operations are stateless pure
//! functions over (subject, pattern, options, optional start offset);
//! offset-taking variants carry an `_at` suffix and expect a byte
//! offset on a char boundary.

use std::sync::Arc;

use regex::Captures;

use crate::cache;
use crate::match_data::MatchData;
use crate::options::Options;
use crate::pattern::{CompiledPattern, PatternError, advance};
use crate::scan::Scan;

/// String-pattern extension methods.
///
/// Options are an option-character string (see
/// [`Options`](crate::Options)); pass `""` for defaults.
pub trait PatternExt {
    /// Whether the pattern occurs in the subject.
    fn has_pattern(&self, pattern: &str, options: &str) -> Result<bool, PatternError>;

    /// Whether the pattern occurs at or after `start`.
    fn has_pattern_at(
        &self,
        pattern: &str,
        options: &str,
        start: usize,
    ) -> Result<bool, PatternError>;

    /// Captures from the first match only, `None` when the pattern
    /// does not occur. With the `r` option, the rightmost match.
    fn match_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<MatchData<'_>>, PatternError>;

    /// [`match_pattern`](PatternExt::match_pattern) starting at `start`.
    fn match_pattern_at(
        &self,
        pattern: &str,
        options: &str,
        start: usize,
    ) -> Result<Option<MatchData<'_>>, PatternError>;

    /// Captures from every match, aggregated into one [`MatchData`]:
    /// numbered captures appended in scan order, named captures from
    /// later matches overwriting earlier ones.
    fn matches_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<MatchData<'_>, PatternError>;

    /// [`matches_pattern`](PatternExt::matches_pattern) starting at
    /// `start`.
    fn matches_pattern_at(
        &self,
        pattern: &str,
        options: &str,
        start: usize,
    ) -> Result<MatchData<'_>, PatternError>;

    /// Copy of the subject with the first occurrence replaced.
    /// `replacement` supports `$n`/`$name` expansion.
    fn sub(&self, pattern: &str, replacement: &str) -> Result<String, PatternError>;

    /// [`sub`](PatternExt::sub) replacing the first occurrence at or
    /// after `start`.
    fn sub_at(
        &self,
        pattern: &str,
        replacement: &str,
        start: usize,
    ) -> Result<String, PatternError>;

    /// Copy of the subject with the first occurrence replaced by the
    /// closure's return value, appended verbatim. Returning the
    /// matched text means "no change".
    fn sub_with<F>(&self, pattern: &str, replace: F) -> Result<String, PatternError>
    where
        F: FnMut(&MatchData<'_>) -> String;

    /// Copy of the subject with every non-overlapping occurrence
    /// replaced, left to right. `replacement` supports `$n`/`$name`
    /// expansion.
    fn gsub(&self, pattern: &str, replacement: &str) -> Result<String, PatternError>;

    /// [`gsub`](PatternExt::gsub) replacing occurrences at or after
    /// `start`.
    fn gsub_at(
        &self,
        pattern: &str,
        replacement: &str,
        start: usize,
    ) -> Result<String, PatternError>;

    /// Copy of the subject with every occurrence replaced by the
    /// closure's return value, appended verbatim.
    fn gsub_with<F>(&self, pattern: &str, replace: F) -> Result<String, PatternError>
    where
        F: FnMut(&MatchData<'_>) -> String;

    /// Invoke `f` once per match with one capture per visible group
    /// (or the whole match when the pattern has no groups).
    fn scan<F>(&self, pattern: &str, options: &str, f: F) -> Result<(), PatternError>
    where
        F: FnMut(&[Option<&str>]);

    /// The same sequence as [`scan`](PatternExt::scan), as a lazy,
    /// restartable iterator.
    fn scan_iter(&self, pattern: &str, options: &str) -> Result<Scan<'_>, PatternError>;

    /// The first matched text, `None` when the pattern does not occur.
    fn find_pattern(&self, pattern: &str, options: &str)
    -> Result<Option<&str>, PatternError>;

    /// A numbered capture of the first match.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when the subject matches but
    /// the group index does not exist.
    fn find_pattern_group(
        &self,
        pattern: &str,
        options: &str,
        group: usize,
    ) -> Result<Option<&str>, PatternError>;

    /// A named capture of the first match; `None` when the pattern
    /// does not occur or the name is absent.
    fn find_pattern_named(
        &self,
        pattern: &str,
        options: &str,
        name: &str,
    ) -> Result<Option<&str>, PatternError>;

    /// Split around the first match: `(before, matched, after)`, or
    /// `(subject, "", "")` when the pattern does not occur.
    fn partition(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<(&str, &str, &str), PatternError>;

    /// Byte offset of the first match.
    fn index_of_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<usize>, PatternError>;

    /// Byte offset of the last match.
    fn last_index_of_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<usize>, PatternError>;
}

impl PatternExt for str {
    fn has_pattern(&self, pattern: &str, options: &str) -> Result<bool, PatternError> {
        self.has_pattern_at(pattern, options, 0)
    }

    fn has_pattern_at(
        &self,
        pattern: &str,
        options: &str,
        start: usize,
    ) -> Result<bool, PatternError> {
        check_offset(self, start)?;
        let pattern = resolve(pattern, options)?;
        Ok(pattern.regex().is_match_at(self, start))
    }

    fn match_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<MatchData<'_>>, PatternError> {
        self.match_pattern_at(pattern, options, 0)
    }

    fn match_pattern_at(
        &self,
        pattern: &str,
        options: &str,
        start: usize,
    ) -> Result<Option<MatchData<'_>>, PatternError> {
        check_offset(self, start)?;
        let pattern = resolve(pattern, options)?;
        Ok(first_match(self, &pattern, start))
    }

    fn matches_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<MatchData<'_>, PatternError> {
        self.matches_pattern_at(pattern, options, 0)
    }

    fn matches_pattern_at(
        &self,
        pattern: &str,
        options: &str,
        start: usize,
    ) -> Result<MatchData<'_>, PatternError> {
        check_offset(self, start)?;
        let pattern = resolve(pattern, options)?;
        Ok(collect_matches(self, &pattern, start))
    }

    fn sub(&self, pattern: &str, replacement: &str) -> Result<String, PatternError> {
        self.sub_at(pattern, replacement, 0)
    }

    fn sub_at(
        &self,
        pattern: &str,
        replacement: &str,
        start: usize,
    ) -> Result<String, PatternError> {
        check_offset(self, start)?;
        let pattern = resolve(pattern, "")?;
        Ok(replace_matches(self, &pattern, start, 1, |caps, dst| {
            caps.expand(replacement, dst);
        }))
    }

    fn sub_with<F>(&self, pattern: &str, mut replace: F) -> Result<String, PatternError>
    where
        F: FnMut(&MatchData<'_>) -> String,
    {
        let pattern = resolve(pattern, "")?;
        Ok(replace_matches(self, &pattern, 0, 1, |caps, dst| {
            let mut data = MatchData::new();
            data.push_match(&pattern, caps);
            dst.push_str(&replace(&data));
        }))
    }

    fn gsub(&self, pattern: &str, replacement: &str) -> Result<String, PatternError> {
        self.gsub_at(pattern, replacement, 0)
    }

    fn gsub_at(
        &self,
        pattern: &str,
        replacement: &str,
        start: usize,
    ) -> Result<String, PatternError> {
        check_offset(self, start)?;
        let pattern = resolve(pattern, "")?;
        Ok(replace_matches(self, &pattern, start, 0, |caps, dst| {
            caps.expand(replacement, dst);
        }))
    }

    fn gsub_with<F>(&self, pattern: &str, mut replace: F) -> Result<String, PatternError>
    where
        F: FnMut(&MatchData<'_>) -> String,
    {
        let pattern = resolve(pattern, "")?;
        Ok(replace_matches(self, &pattern, 0, 0, |caps, dst| {
            let mut data = MatchData::new();
            data.push_match(&pattern, caps);
            dst.push_str(&replace(&data));
        }))
    }

    fn scan<F>(&self, pattern: &str, options: &str, mut f: F) -> Result<(), PatternError>
    where
        F: FnMut(&[Option<&str>]),
    {
        for item in self.scan_iter(pattern, options)? {
            f(&item);
        }
        Ok(())
    }

    fn scan_iter(&self, pattern: &str, options: &str) -> Result<Scan<'_>, PatternError> {
        let pattern = resolve(pattern, options)?;
        Ok(Scan::new(pattern, self))
    }

    fn find_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<&str>, PatternError> {
        self.find_pattern_group(pattern, options, 0)
    }

    fn find_pattern_group(
        &self,
        pattern: &str,
        options: &str,
        group: usize,
    ) -> Result<Option<&str>, PatternError> {
        match self.match_pattern(pattern, options)? {
            Some(data) => Ok(Some(data.group(group)?)),
            None => Ok(None),
        }
    }

    fn find_pattern_named(
        &self,
        pattern: &str,
        options: &str,
        name: &str,
    ) -> Result<Option<&str>, PatternError> {
        Ok(self.match_pattern(pattern, options)?.and_then(|data| data.named(name)))
    }

    fn partition(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<(&str, &str, &str), PatternError> {
        let pattern = resolve(pattern, options)?;
        match first_match(self, &pattern, 0) {
            Some(data) => {
                let start = data.begin(0)?;
                let end = data.end(0)?;
                Ok((&self[..start], &self[start..end], &self[end..]))
            }
            None => Ok((self, "", "")),
        }
    }

    fn index_of_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<usize>, PatternError> {
        Ok(self.match_pattern(pattern, options)?.map(|data| data.begin(0)).transpose()?)
    }

    fn last_index_of_pattern(
        &self,
        pattern: &str,
        options: &str,
    ) -> Result<Option<usize>, PatternError> {
        let pattern = resolve(pattern, options)?;
        let mut last = None;
        let mut pos = 0;
        while pos <= self.len() {
            let Some(m) = pattern.regex().find_at(self, pos) else { break };
            last = Some(m.start());
            match advance(self, m.start(), m.end()) {
                Some(next) => pos = next,
                None => break,
            }
        }
        Ok(last)
    }
}

fn resolve(pattern: &str, options: &str) -> Result<Arc<CompiledPattern>, PatternError> {
    cache::global().get_or_compile(pattern, Options::parse(options))
}

fn check_offset(subject: &str, offset: usize) -> Result<(), PatternError> {
    if !subject.is_char_boundary(offset) {
        return Err(PatternError::OffsetOutOfRange { offset, len: subject.len() });
    }
    Ok(())
}

/// First match at or after `start`; the rightmost match in
/// right-to-left mode.
fn first_match<'h>(
    subject: &'h str,
    pattern: &CompiledPattern,
    start: usize,
) -> Option<MatchData<'h>> {
    let caps = if pattern.options().right_to_left {
        let mut last = None;
        let mut pos = start;
        while pos <= subject.len() {
            let Some(caps) = pattern.regex().captures_at(subject, pos) else { break };
            let Some(whole) = caps.get(0) else { break };
            let span = (whole.start(), whole.end());
            last = Some(caps);
            match advance(subject, span.0, span.1) {
                Some(next) => pos = next,
                None => break,
            }
        }
        last?
    } else {
        pattern.regex().captures_at(subject, start)?
    };

    let mut data = MatchData::new();
    data.push_match(pattern, &caps);
    Some(data)
}

/// Every match at or after `start`, folded into one collection.
fn collect_matches<'h>(
    subject: &'h str,
    pattern: &CompiledPattern,
    start: usize,
) -> MatchData<'h> {
    let mut all = Vec::new();
    let mut pos = start;
    while pos <= subject.len() {
        let Some(caps) = pattern.regex().captures_at(subject, pos) else { break };
        let Some(whole) = caps.get(0) else { break };
        let span = (whole.start(), whole.end());
        all.push(caps);
        match advance(subject, span.0, span.1) {
            Some(next) => pos = next,
            None => break,
        }
    }

    let mut data = MatchData::new();
    if pattern.options().right_to_left {
        for caps in all.iter().rev() {
            data.push_match(pattern, caps);
        }
    } else {
        for caps in &all {
            data.push_match(pattern, caps);
        }
    }
    data
}

/// Replace up to `limit` matches at or after `start` (0 = no limit),
/// appending replacement text through `append`.
fn replace_matches<'h, A>(
    subject: &'h str,
    pattern: &CompiledPattern,
    start: usize,
    limit: usize,
    mut append: A,
) -> String
where
    A: FnMut(&Captures<'h>, &mut String),
{
    let mut out = String::with_capacity(subject.len());
    out.push_str(&subject[..start]);
    let mut last_end = start;
    let mut pos = start;
    let mut replaced = 0;

    while pos <= subject.len() && (limit == 0 || replaced < limit) {
        let Some(caps) = pattern.regex().captures_at(subject, pos) else { break };
        let Some(whole) = caps.get(0) else { break };
        out.push_str(&subject[last_end..whole.start()]);
        append(&caps, &mut out);
        last_end = whole.end();
        replaced += 1;
        match advance(subject, whole.start(), whole.end()) {
            Some(next) => pos = next,
            None => break,
        }
    }

    out.push_str(&subject[last_end..]);
    out
}

#[cfg(test)]
#[path = "ext_tests.rs"]
mod tests;
