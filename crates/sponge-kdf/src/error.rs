// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Key derivation error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Iteration count was zero
    #[error("InvalidIterationCount")]
    InvalidIterationCount,

    /// Requested key length was zero
    #[error("EmptyKey")]
    EmptyKey,
}
