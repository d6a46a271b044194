// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Option-character codec.
//!
//! Matching modes are expressed as a compact character string, one
//! character per toggle (`"imsxcer"` order is canonical):
//!
//! | char | effect |
//! |------|--------|
//! | `i`  | case-insensitive matching |
//! | `m`  | multi-line mode: `^`/`$` match at line boundaries |
//! | `s`  | single-line mode: `.` also matches line terminators |
//! | `x`  | free-spacing pattern syntax |
//! | `c`  | request ahead-of-time optimized compilation |
//! | `e`  | explicit captures: unnamed groups are not numbered |
//! | `r`  | scan the subject right to left |

use crate::pattern::PatternError;

/// Resolved matching-mode flags.
///
/// Two values are equal iff the same toggles are set; the order and
/// repetition of characters in the source string never matter, so
/// `Options` is directly usable as part of a cache key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches line terminators.
    pub dot_matches_newline: bool,
    /// `x`: whitespace and `#` comments in the pattern are ignored.
    pub ignore_whitespace: bool,
    /// `c`: ahead-of-time optimized compilation. The backing engine
    /// always compiles patterns eagerly, so this only distinguishes
    /// cache entries.
    pub compiled: bool,
    /// `e`: unnamed groups produce no numbered captures.
    pub explicit_capture: bool,
    /// `r`: matches are visited right to left.
    pub right_to_left: bool,
}

impl Options {
    /// Resolve an option string, ignoring unrecognized characters.
    ///
    /// This is the policy the string API uses throughout. Use
    /// [`Options::parse_strict`] to reject unknown characters instead.
    pub fn parse(chars: &str) -> Self {
        let mut options = Self::default();
        for c in chars.chars() {
            options.apply(c);
        }
        options
    }

    /// Resolve an option string, failing on the first unrecognized
    /// character with [`PatternError::InvalidOption`].
    pub fn parse_strict(chars: &str) -> Result<Self, PatternError> {
        let mut options = Self::default();
        for c in chars.chars() {
            if !options.apply(c) {
                return Err(PatternError::InvalidOption { option: c });
            }
        }
        Ok(options)
    }

    /// Render the canonical option string for this flag set.
    pub fn to_chars(self) -> String {
        let mut chars = String::new();
        for (c, set) in [
            ('i', self.ignore_case),
            ('m', self.multi_line),
            ('s', self.dot_matches_newline),
            ('x', self.ignore_whitespace),
            ('c', self.compiled),
            ('e', self.explicit_capture),
            ('r', self.right_to_left),
        ] {
            if set {
                chars.push(c);
            }
        }
        chars
    }

    fn apply(&mut self, c: char) -> bool {
        match c {
            'i' => self.ignore_case = true,
            'm' => self.multi_line = true,
            's' => self.dot_matches_newline = true,
            'x' => self.ignore_whitespace = true,
            'c' => self.compiled = true,
            'e' => self.explicit_capture = true,
            'r' => self.right_to_left = true,
            _ => return false,
        }
        true
    }
}

impl From<&str> for Options {
    fn from(chars: &str) -> Self {
        Self::parse(chars)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
