// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use subtle::ConstantTimeEq;

use sponge_util::secure_zero_vec;
use sponge_xof::Shake256Sponge;

use crate::error::KdfError;
use crate::params::KdfParams;

/// Derives `key.len()` bytes from `password` and `salt` into `key`.
///
/// Password bytes beyond `key.len()` are ignored; shorter passwords are
/// zero-padded. Both working buffers are wiped before returning.
///
/// # Errors
///
/// - [`KdfError::InvalidIterationCount`] if `iterations == 0`.
/// - [`KdfError::EmptyKey`] if `key` is empty.
///
/// `key` is not written on error.
pub fn derive_key_into(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key: &mut [u8],
) -> Result<(), KdfError> {
    if iterations == 0 {
        return Err(KdfError::InvalidIterationCount);
    }

    if key.is_empty() {
        return Err(KdfError::EmptyKey);
    }

    tracing::debug!(iterations, key_len = key.len(), "deriving key");

    let key_len = key.len();
    let overlay = password.len().min(key_len);

    let mut work = vec![0u8; key_len];
    let mut next = vec![0u8; key_len];
    work[..overlay].copy_from_slice(&password[..overlay]);

    for _ in 0..iterations {
        let mut sponge = Shake256Sponge::new();
        sponge.absorb(&work).absorb(salt);
        sponge.squeeze_into(&mut next);
        mem::swap(&mut work, &mut next);
    }

    key.copy_from_slice(&work);

    secure_zero_vec(&mut work);
    secure_zero_vec(&mut next);

    Ok(())
}

/// Derives a `key_len`-byte key. See [`derive_key_into`].
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<Vec<u8>, KdfError> {
    let mut key = vec![0u8; key_len];
    derive_key_into(password, salt, iterations, &mut key)?;

    Ok(key)
}

/// Derives a key using stored [`KdfParams`].
pub fn derive_key_with(
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<Vec<u8>, KdfError> {
    derive_key(password, salt, params.iterations, params.key_len)
}

/// Re-derives a key and compares it with `expected` in constant time.
///
/// A length mismatch between `expected` and `params.key_len` is a
/// mismatch, not an error.
///
/// # Errors
///
/// Same as [`derive_key`] for invalid `params`.
pub fn verify_key(
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
    expected: &[u8],
) -> Result<bool, KdfError> {
    let mut derived = derive_key_with(password, salt, params)?;
    let matches = bool::from(derived.as_slice().ct_eq(expected));
    secure_zero_vec(&mut derived);

    if !matches {
        tracing::debug!("derived key mismatch");
    }

    Ok(matches)
}
