// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sponge_xof
//!
//! SHAKE256 extendable-output hashing.
//!
//! Every byte the sponge crates emit (random output, derived keys, digests)
//! is squeezed out of SHAKE256. This crate wraps the `sha3` implementation
//! behind a small absorb/squeeze API and the one-shot helpers the rest of the
//! workspace exposes.
//!
//! ## Example
//!
//! ```rust
//! use sponge_xof::{Shake256Sponge, shake256_hex};
//!
//! let digest = shake256_hex(b"hello", 32).expect("Failed to hash");
//! assert_eq!(digest.len(), 64);
//!
//! let mut out = [0u8; 48];
//! let mut sponge = Shake256Sponge::new();
//! sponge.absorb(b"part one").absorb(b"part two");
//! sponge.squeeze_into(&mut out);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hash;
mod sponge;

pub use error::XofError;
pub use hash::{hash_str, shake256, shake256_hex, shake256_to_vec};
pub use sponge::Shake256Sponge;
