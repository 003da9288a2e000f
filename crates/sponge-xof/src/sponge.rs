// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};

/// Incremental SHAKE256: absorb any number of inputs, then squeeze once.
///
/// Inputs are absorbed in call order; absorbing `a` then `b` is the same as
/// absorbing `a || b`. Squeezing consumes the sponge.
#[derive(Clone, Default)]
pub struct Shake256Sponge {
    inner: Shake256,
}

impl Shake256Sponge {
    /// Creates an empty sponge.
    pub fn new() -> Self {
        Self {
            inner: Shake256::default(),
        }
    }

    /// Absorbs `data` into the sponge.
    #[inline]
    pub fn absorb(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalizes the sponge and fills `out` with XOF output.
    ///
    /// Any output length is valid, including zero.
    #[inline]
    pub fn squeeze_into(self, out: &mut [u8]) {
        let mut reader = self.inner.finalize_xof();
        reader.read(out);
    }
}

impl fmt::Debug for Shake256Sponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shake256Sponge([REDACTED])")
    }
}
