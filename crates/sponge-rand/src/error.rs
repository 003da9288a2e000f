// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sponge_util::HexError;
use thiserror::Error;

/// Errors that can occur when generating random data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandError {
    /// The entropy source is unavailable or returned fewer bytes than requested.
    #[error("EntropySourceUnavailable")]
    EntropySourceUnavailable,

    /// Zero random bytes were requested.
    #[error("EmptyRequest")]
    EmptyRequest,

    /// `random_int` was called with an exclusive upper bound of zero.
    #[error("ZeroBound")]
    ZeroBound,

    /// Session token length outside the accepted range.
    #[error("TokenLengthOutOfRange: {length} (expected {min}..={max})")]
    TokenLengthOutOfRange {
        /// Requested length.
        length: usize,
        /// Shortest accepted length.
        min: usize,
        /// Longest accepted length.
        max: usize,
    },

    /// Generated bytes could not be hex-encoded.
    #[error("Encoding: {0}")]
    Encoding(#[from] HexError),
}
