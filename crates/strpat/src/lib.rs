// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ruby-flavored string pattern operations backed by a concurrent
//! compiled-pattern cache.
//!
//! Patterns and matching modes are plain strings; every operation
//! resolves its compiled matcher through a process-wide cache so the
//! same (pattern, options) pair is compiled effectively once, even
//! under concurrent use.
//!
//! ```
//! use strpat::PatternExt;
//!
//! let m = "John Wilkes Booth"
//!     .matches_pattern(r"(?<firstname>\w+)\s(\w+)\s(?<lastname>\w+)", "")?;
//!
//! assert_eq!(m.group(0)?, "John Wilkes Booth");
//! assert_eq!(m.group(1)?, "Wilkes");
//! assert_eq!(m.named("firstname"), Some("John"));
//! assert_eq!(m.named("lastname"), Some("Booth"));
//! assert_eq!(m.len(), 4);
//!
//! assert_eq!("foobarfoobaz".sub("foo", "fuz")?, "fuzbarfoobaz");
//! assert_eq!("foobarfoobaz".gsub("foo", "fuz")?, "fuzbarfuzbaz");
//! # Ok::<(), strpat::PatternError>(())
//! ```

pub mod cache;
pub mod match_data;
pub mod options;
pub mod pattern;
pub mod scan;

mod ext;

pub use cache::PatternCache;
pub use ext::PatternExt;
pub use match_data::MatchData;
pub use options::Options;
pub use pattern::{CompiledPattern, PatternError};
pub use scan::Scan;
