// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Iterated SHAKE256 key stretching.
//!
//! The password is truncated or zero-padded to the key length, then hashed
//! together with the salt `iterations` times:
//!
//! ```text
//! work_0     = password[..key_len] || 0x00..
//! work_{i+1} = SHAKE256(work_i || salt)[..key_len]
//! key        = work_iterations
//! ```
//!
//! This is a CPU-bound stretch only. It is not memory-hard and is not a
//! replacement for Argon2 or scrypt.
//!
//! ## Example
//!
//! ```rust
//! use sponge_kdf::{KdfParams, derive_key_with, verify_key};
//!
//! let params = KdfParams { iterations: 1_000, key_len: 32 };
//! let salt = [7u8; 16];
//!
//! let key = derive_key_with(b"hunter2", &salt, &params).expect("Failed to derive key");
//! assert_eq!(key.len(), 32);
//!
//! assert!(verify_key(b"hunter2", &salt, &params, &key).expect("Failed to verify key"));
//! assert!(!verify_key(b"hunter3", &salt, &params, &key).expect("Failed to verify key"));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod kdf;
mod params;

pub use error::KdfError;
pub use kdf::{derive_key, derive_key_into, derive_key_with, verify_key};
pub use params::{DEFAULT_ITERATIONS, DEFAULT_KEY_LEN, KdfParams};
