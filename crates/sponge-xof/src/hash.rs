// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot SHAKE256 helpers.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use sponge_util::{bytes_to_hex, secure_zero_vec};

use crate::error::XofError;
use crate::sponge::Shake256Sponge;

/// Hashes `input` with SHAKE256, filling all of `output`.
///
/// # Errors
///
/// Returns [`XofError::EmptyOutput`] if `output` is empty.
pub fn shake256(input: &[u8], output: &mut [u8]) -> Result<(), XofError> {
    if output.is_empty() {
        return Err(XofError::EmptyOutput);
    }

    let mut sponge = Shake256Sponge::new();
    sponge.absorb(input);
    sponge.squeeze_into(output);

    Ok(())
}

/// Hashes `input` with SHAKE256 into a new `output_len`-byte vector.
///
/// # Errors
///
/// Returns [`XofError::EmptyOutput`] if `output_len == 0`.
///
/// # Example
///
/// ```rust
/// use sponge_xof::shake256_to_vec;
///
/// let a = shake256_to_vec(b"input", 64).unwrap();
/// let b = shake256_to_vec(b"input", 32).unwrap();
///
/// // XOF outputs of different lengths share a prefix
/// assert_eq!(&a[..32], &b[..]);
/// ```
pub fn shake256_to_vec(input: &[u8], output_len: usize) -> Result<Vec<u8>, XofError> {
    let mut output = vec![0u8; output_len];
    shake256(input, &mut output)?;

    Ok(output)
}

/// Hashes `input` with SHAKE256 and returns the digest as lowercase hex
/// (`2 * output_len` characters).
///
/// # Errors
///
/// Returns [`XofError::EmptyOutput`] if `output_len == 0`.
pub fn shake256_hex(input: &[u8], output_len: usize) -> Result<String, XofError> {
    let mut digest = shake256_to_vec(input, output_len)?;
    let hex = bytes_to_hex(&digest);
    secure_zero_vec(&mut digest);

    Ok(hex?)
}

/// Hashes the UTF-8 bytes of `s` with SHAKE256.
///
/// # Errors
///
/// Returns [`XofError::EmptyOutput`] if `output_len == 0`.
pub fn hash_str(s: &str, output_len: usize) -> Result<Vec<u8>, XofError> {
    shake256_to_vec(s.as_bytes(), output_len)
}
