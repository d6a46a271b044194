//! Shared imports for behavioral specs.

#![allow(unused_imports)]

pub use strpat::{MatchData, Options, PatternCache, PatternError, PatternExt};
