// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Default number of stretching rounds.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Default derived key length in bytes.
pub const DEFAULT_KEY_LEN: usize = 32;

/// Stretching parameters that must be stored alongside a derived key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of SHAKE256 rounds, at least 1.
    pub iterations: u32,
    /// Derived key length in bytes, at least 1.
    pub key_len: usize,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            key_len: DEFAULT_KEY_LEN,
        }
    }
}
