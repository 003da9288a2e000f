// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size draws built on [`EntropyContext::fill_random_bytes`].
//!
//! Multi-byte integers are read little-endian.

use alloc::string::String;
use alloc::vec::Vec;

use sponge_util::{bytes_to_hex, secure_zero, secure_zero_vec};

use crate::consts::{NONCE_LEN, SALT_LEN, SESSION_TOKEN_MAX_LEN, SESSION_TOKEN_MIN_LEN};
use crate::context::EntropyContext;
use crate::error::RandError;
use crate::traits::EntropySource;

/// A 64-bit nonce and the raw bytes it was read from.
///
/// `value == u64::from_le_bytes(bytes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce {
    /// Little-endian interpretation of `bytes`.
    pub value: u64,
    /// The raw draw.
    pub bytes: [u8; NONCE_LEN],
}

impl<E: EntropySource> EntropyContext<E> {
    /// Returns a random value in `[0, max)`.
    ///
    /// Reads 4 random bytes as a little-endian `u32` and reduces it modulo
    /// `max`. The reduction is biased towards small values when `max` does
    /// not divide 2^32; the bias is below `max / 2^32`.
    ///
    /// # Errors
    ///
    /// - [`RandError::ZeroBound`] if `max == 0`.
    /// - [`RandError::EntropySourceUnavailable`] if the draw fails.
    pub fn random_int(&self, max: u32) -> Result<u32, RandError> {
        if max == 0 {
            return Err(RandError::ZeroBound);
        }

        let mut buf = [0u8; 4];
        self.fill_random_bytes(&mut buf)?;
        let value = u32::from_le_bytes(buf);
        secure_zero(&mut buf);

        Ok(value % max)
    }

    /// Returns a uniformly distributed `u64`.
    pub fn random_u64(&self) -> Result<u64, RandError> {
        let mut buf = [0u8; 8];
        self.fill_random_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        secure_zero(&mut buf);

        Ok(value)
    }

    /// Draws a fresh 8-byte nonce.
    ///
    /// A failed draw is reported as an error; there is no sentinel value.
    pub fn generate_nonce(&self) -> Result<Nonce, RandError> {
        let mut bytes = [0u8; NONCE_LEN];
        self.fill_random_bytes(&mut bytes)?;

        Ok(Nonce {
            value: u64::from_le_bytes(bytes),
            bytes,
        })
    }

    /// Returns `length` random bytes for use as a session token.
    ///
    /// # Errors
    ///
    /// - [`RandError::TokenLengthOutOfRange`] unless `16 <= length <= 512`.
    /// - [`RandError::EntropySourceUnavailable`] if the draw fails.
    pub fn session_token(&self, length: usize) -> Result<Vec<u8>, RandError> {
        if !(SESSION_TOKEN_MIN_LEN..=SESSION_TOKEN_MAX_LEN).contains(&length) {
            return Err(RandError::TokenLengthOutOfRange {
                length,
                min: SESSION_TOKEN_MIN_LEN,
                max: SESSION_TOKEN_MAX_LEN,
            });
        }

        self.random_bytes(length)
    }

    /// Returns a session token of `length` bytes as lowercase hex
    /// (`2 * length` characters).
    ///
    /// The raw token bytes are wiped once encoded.
    pub fn session_token_hex(&self, length: usize) -> Result<String, RandError> {
        let mut token = self.session_token(length)?;
        let encoded = bytes_to_hex(&token);
        secure_zero_vec(&mut token);

        Ok(encoded?)
    }

    /// Returns a random 16-byte salt for key derivation.
    pub fn generate_salt(&self) -> Result<[u8; SALT_LEN], RandError> {
        let mut salt = [0u8; SALT_LEN];
        self.fill_random_bytes(&mut salt)?;

        Ok(salt)
    }
}
