// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use sponge_util::{secure_zero, secure_zero_vec};
use sponge_xof::Shake256Sponge;

use crate::consts::{ENTROPY_POOL_LEN, RAW_ENTROPY_CHUNK, SEED_STATE_LEN};
use crate::error::RandError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

struct SeedMaterial {
    seed_state: [u8; SEED_STATE_LEN],
    // Filled at creation, never absorbed by the generator.
    entropy_pool: [u8; ENTROPY_POOL_LEN],
}

impl SeedMaterial {
    fn zeroed() -> Box<Self> {
        Box::new(Self {
            seed_state: [0u8; SEED_STATE_LEN],
            entropy_pool: [0u8; ENTROPY_POOL_LEN],
        })
    }

    fn wipe(&mut self) {
        secure_zero(&mut self.seed_state);
        secure_zero(&mut self.entropy_pool);
    }
}

/// Seeded generator state.
///
/// Owns 256 bytes of seed material and a 4096-byte reserved pool, both read
/// from the entropy source at construction and kept in a single heap
/// allocation. Every output chunk absorbs a fresh 4096-byte block from the
/// same source followed by the seed into SHAKE256.
///
/// The context is wiped when it is destroyed or dropped. [`Debug`] never
/// prints seed material.
pub struct EntropyContext<E: EntropySource = SystemEntropySource> {
    source: E,
    material: Box<SeedMaterial>,
}

impl EntropyContext<SystemEntropySource> {
    /// Creates a context seeded from the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::EntropySourceUnavailable`] if either seed read
    /// fails.
    pub fn new() -> Result<Self, RandError> {
        Self::with_source(SystemEntropySource {})
    }
}

impl<E: EntropySource> EntropyContext<E> {
    /// Creates a context seeded from `source`.
    ///
    /// Performs two reads: 256 bytes of seed state, then 4096 bytes of pool.
    /// If either fails, whatever was already read is wiped before returning.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::EntropySourceUnavailable`] if either read fails.
    pub fn with_source(source: E) -> Result<Self, RandError> {
        let mut material = SeedMaterial::zeroed();

        let seeded = source
            .fill_bytes(&mut material.seed_state)
            .and_then(|()| source.fill_bytes(&mut material.entropy_pool));

        if let Err(err) = seeded {
            material.wipe();
            tracing::warn!("entropy context seeding failed");
            return Err(err);
        }

        tracing::debug!(
            seed_len = SEED_STATE_LEN,
            pool_len = ENTROPY_POOL_LEN,
            "entropy context created"
        );

        Ok(Self { source, material })
    }

    /// Wipes all seed material and releases the context.
    pub fn destroy(mut self) {
        self.wipe();
    }

    /// Fills `out` with random bytes.
    ///
    /// Output is produced in 4096-byte chunks. Each chunk reads a fresh block
    /// from the entropy source, absorbs it followed by the seed state into
    /// SHAKE256 and squeezes the chunk. `out` is only written once every
    /// chunk has been produced.
    ///
    /// # Errors
    ///
    /// - [`RandError::EmptyRequest`] if `out` is empty.
    /// - [`RandError::EntropySourceUnavailable`] if any chunk read fails;
    ///   `out` is left untouched.
    pub fn fill_random_bytes(&self, out: &mut [u8]) -> Result<(), RandError> {
        if out.is_empty() {
            return Err(RandError::EmptyRequest);
        }

        let mut staged = vec![0u8; out.len()];
        let result = self.generate_into(&mut staged);

        if result.is_ok() {
            out.copy_from_slice(&staged);
        }

        secure_zero_vec(&mut staged);

        result
    }

    /// Returns `len` random bytes.
    ///
    /// # Errors
    ///
    /// Same as [`EntropyContext::fill_random_bytes`].
    pub fn random_bytes(&self, len: usize) -> Result<Vec<u8>, RandError> {
        if len == 0 {
            return Err(RandError::EmptyRequest);
        }

        let mut out = vec![0u8; len];
        self.fill_random_bytes(&mut out)?;

        Ok(out)
    }

    fn generate_into(&self, staged: &mut [u8]) -> Result<(), RandError> {
        let requested = staged.len();
        let mut raw = vec![0u8; RAW_ENTROPY_CHUNK];
        let mut result = Ok(());

        for chunk in staged.chunks_mut(RAW_ENTROPY_CHUNK) {
            if let Err(err) = self.source.fill_bytes(&mut raw) {
                tracing::warn!(requested, "random byte generation aborted");
                result = Err(err);
                break;
            }

            let mut sponge = Shake256Sponge::new();
            sponge.absorb(&raw).absorb(&self.material.seed_state);
            sponge.squeeze_into(chunk);
        }

        secure_zero_vec(&mut raw);

        result
    }

    pub(crate) fn wipe(&mut self) {
        self.material.wipe();
    }

    #[cfg(test)]
    pub(crate) fn seed_state(&self) -> &[u8] {
        &self.material.seed_state
    }

    #[cfg(test)]
    pub(crate) fn entropy_pool(&self) -> &[u8] {
        &self.material.entropy_pool
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &E {
        &self.source
    }
}

impl<E: EntropySource> Drop for EntropyContext<E> {
    fn drop(&mut self) {
        self.wipe();
        tracing::debug!("entropy context destroyed");
    }
}

impl<E: EntropySource> fmt::Debug for EntropyContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntropyContext([REDACTED])")
    }
}
