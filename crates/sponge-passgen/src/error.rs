// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sponge_rand::RandError;
use thiserror::Error;

/// Errors that can occur when generating passwords or passphrases.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PassgenError {
    /// Password length outside the accepted range.
    #[error("LengthOutOfRange: {length} (expected {min}..={max})")]
    LengthOutOfRange {
        /// Requested length.
        length: usize,
        /// Shortest accepted length.
        min: usize,
        /// Longest accepted length.
        max: usize,
    },

    /// Passphrase word count outside the accepted range.
    #[error("WordCountOutOfRange: {count} (expected {min}..={max})")]
    WordCountOutOfRange {
        /// Requested word count.
        count: usize,
        /// Fewest accepted words.
        min: usize,
        /// Most accepted words.
        max: usize,
    },

    /// No character group was selected.
    #[error("EmptyCharset")]
    EmptyCharset,

    /// Drawing a random index failed.
    #[error("Rand: {0}")]
    Rand(#[from] RandError),
}
