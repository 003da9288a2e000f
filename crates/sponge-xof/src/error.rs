// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sponge_util::HexError;
use thiserror::Error;

/// Errors returned by the SHAKE256 helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum XofError {
    /// A zero-length output was requested.
    #[error("EmptyOutput")]
    EmptyOutput,

    /// The digest could not be hex-encoded.
    #[error("Encoding: {0}")]
    Encoding(#[from] HexError),
}
