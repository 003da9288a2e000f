// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sponge_rand
//!
//! Turns operating-system entropy into an unbounded stream of random bytes.
//!
//! An [`EntropyContext`] is seeded once from an [`EntropySource`]. Every
//! request then reads a fresh block from the same source per 4096-byte
//! chunk, absorbs it together with the context seed into SHAKE256 and
//! squeezes the output. All randomness in the sponge crates flows through
//! [`EntropyContext::fill_random_bytes`].
//!
//! ## Core Types
//!
//! - [`EntropyContext`]: owned seed material plus the byte generator
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`Nonce`]: 64-bit nonce together with its raw bytes
//!
//! ## Example
//!
//! ```rust
//! use sponge_rand::EntropyContext;
//!
//! let ctx = EntropyContext::new().expect("Failed to create context");
//!
//! let bytes = ctx.random_bytes(32).expect("Failed to generate bytes");
//! assert_eq!(bytes.len(), 32);
//!
//! let die = ctx.random_int(6).expect("Failed to draw") + 1;
//! assert!((1..=6).contains(&die));
//!
//! let token = ctx.session_token_hex(32).expect("Failed to generate token");
//! assert_eq!(token.len(), 64);
//!
//! ctx.destroy();
//! ```
//!
//! ## Concurrency
//!
//! Contexts hold no locks. Share one across threads only behind external
//! synchronization, or give each worker its own context.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod context;
mod derived;
mod error;
mod support;
mod system;
mod traits;

pub mod consts;

pub use context::EntropyContext;
pub use derived::Nonce;
pub use error::RandError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
