// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by the hex codec.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Encoding was requested for an empty byte slice.
    #[error("EmptyInput")]
    EmptyInput,

    /// The hex string has an odd number of characters.
    #[error("OddLength")]
    OddLength,

    /// The hex string contains a character outside `[0-9a-fA-F]`.
    #[error("InvalidHexCharacter: {c:?} at index {index}")]
    InvalidHexCharacter {
        /// Offending character.
        c: char,
        /// Position of the offending character in the input.
        index: usize,
    },

    /// The decoded output would not fit in the caller's capacity.
    #[error("OutputTooLarge: need {needed} bytes, capacity is {capacity}")]
    OutputTooLarge {
        /// Bytes the input decodes to.
        needed: usize,
        /// Bytes the caller can accept.
        capacity: usize,
    },
}
