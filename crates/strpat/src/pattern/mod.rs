// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern handles.
//!
//! A [`CompiledPattern`] bundles the engine-compiled matcher with the
//! per-group capture classification so that classification is computed
//! once per pattern, not once per match.

pub mod matcher;

pub use matcher::{CompiledPattern, PatternError};

pub(crate) use matcher::{GroupKind, advance};
