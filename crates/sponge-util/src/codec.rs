// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte ↔ hex conversion.

use alloc::string::String;
use alloc::vec::Vec;

use hex::FromHexError;

use crate::error::HexError;
use crate::zeroize::secure_zero_vec;

/// Encodes `bytes` as lowercase hex, two characters per byte.
///
/// # Errors
///
/// Returns [`HexError::EmptyInput`] if `bytes` is empty.
///
/// # Example
///
/// ```
/// use sponge_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x00, 0xff, 0x10]).unwrap(), "00ff10");
/// assert!(bytes_to_hex(&[]).is_err());
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> Result<String, HexError> {
    if bytes.is_empty() {
        return Err(HexError::EmptyInput);
    }

    Ok(hex::encode(bytes))
}

/// Decodes a hex string, accepting at most `max_len` output bytes.
///
/// Both lower and upper case digits are accepted. An empty string decodes to
/// an empty vector.
///
/// # Errors
///
/// Checked in this order:
/// - [`HexError::OddLength`]
/// - [`HexError::OutputTooLarge`] if `hex.len() / 2 > max_len`
/// - [`HexError::InvalidHexCharacter`]
///
/// # Example
///
/// ```
/// use sponge_util::{HexError, hex_to_bytes};
///
/// assert_eq!(hex_to_bytes("deadbeef", 4).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(hex_to_bytes("abc", 4), Err(HexError::OddLength));
/// ```
pub fn hex_to_bytes(hex: &str, max_len: usize) -> Result<Vec<u8>, HexError> {
    check_shape(hex, max_len)?;

    hex::decode(hex).map_err(map_from_hex_error)
}

/// Decodes a hex string into `out`, whose length is the capacity.
///
/// Returns the number of bytes written. `out` is left untouched on failure.
///
/// # Errors
///
/// Same as [`hex_to_bytes`] with `max_len = out.len()`.
pub fn hex_to_bytes_into(hex: &str, out: &mut [u8]) -> Result<usize, HexError> {
    let mut staged = hex_to_bytes(hex, out.len())?;
    let written = staged.len();

    out[..written].copy_from_slice(&staged);
    secure_zero_vec(&mut staged);

    Ok(written)
}

fn check_shape(hex: &str, max_len: usize) -> Result<(), HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    let needed = hex.len() / 2;
    if needed > max_len {
        return Err(HexError::OutputTooLarge {
            needed,
            capacity: max_len,
        });
    }

    Ok(())
}

fn map_from_hex_error(err: FromHexError) -> HexError {
    match err {
        FromHexError::InvalidHexCharacter { c, index } => {
            HexError::InvalidHexCharacter { c, index }
        }
        // Length is validated by `check_shape` before decoding
        _ => HexError::OddLength,
    }
}
