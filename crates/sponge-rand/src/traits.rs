// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::RandError;

/// Trait for cryptographically secure entropy sources.
///
/// Implementations must provide randomness suitable for seeding and for the
/// per-chunk refresh of [`EntropyContext`](crate::EntropyContext). A source
/// either fills the whole destination or fails; short reads are failures.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::EntropySourceUnavailable`] if the source is
    /// unavailable or cannot fill all of `dest`.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandError>;
}
