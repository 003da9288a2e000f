// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sponge_util
//!
//! Leaf helpers shared by every sponge crate:
//!
//! - **Secure erasure**: [`secure_zero`] and [`secure_zero_vec`] overwrite
//!   sensitive buffers in a way the optimizer cannot drop as dead stores.
//! - **Hex codec**: [`bytes_to_hex`] and [`hex_to_bytes`] with explicit,
//!   all-or-nothing failure.
//!
//! ## Example
//!
//! ```rust
//! use sponge_util::{bytes_to_hex, hex_to_bytes, is_slice_zeroized, secure_zero};
//!
//! let mut secret = [0xde, 0xad, 0xbe, 0xef];
//! let hex = bytes_to_hex(&secret).expect("Failed to encode");
//! assert_eq!(hex, "deadbeef");
//!
//! let decoded = hex_to_bytes(&hex, 4).expect("Failed to decode");
//! assert_eq!(decoded, secret);
//!
//! secure_zero(&mut secret);
//! assert!(is_slice_zeroized(&secret));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod codec;
mod error;
mod zeroize;

pub use codec::{bytes_to_hex, hex_to_bytes, hex_to_bytes_into};
pub use error::HexError;
pub use zeroize::{is_slice_zeroized, is_vec_fully_zeroized, secure_zero, secure_zero_vec};
