// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Entropy in, secrets out.</em></p>
//!
//! ---
//!
//! Sponge turns operating-system entropy into random bytes through SHAKE256
//! and builds password generation, passphrase generation and iterated key
//! stretching on top of it. Intermediate buffers are wiped on every path.
//!
//! # Features
//!
//! - **Seeded contexts**: each [`rand::EntropyContext`] mixes fresh OS
//!   entropy with its own 256-byte seed for every 4096-byte chunk
//! - **Atomic output**: a failed request never hands back partial bytes
//! - **Passwords and passphrases**: charset groups or a 64-word list
//! - **Key stretching**: iterated SHAKE256 with constant-time verification
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use sponge::kdf::{KdfParams, derive_key_with, verify_key};
//! use sponge::passgen::{CharsetFlags, generate_passphrase, generate_password};
//! use sponge::rand::EntropyContext;
//!
//! fn main() -> Result<(), sponge::Error> {
//!     let ctx = EntropyContext::new()?;
//!
//!     let password = generate_password(&ctx, CharsetFlags::ALL, 20)?;
//!     let phrase = generate_passphrase(&ctx, 5, '-')?;
//!     let token = ctx.session_token_hex(32)?;
//!     assert_eq!(token.len(), 64);
//!
//!     let salt = ctx.generate_salt()?;
//!     let params = KdfParams { iterations: 1_000, key_len: 32 };
//!     let key = derive_key_with(password.as_bytes(), &salt, &params)?;
//!     assert!(verify_key(password.as_bytes(), &salt, &params, &key)?);
//!
//!     let digest = sponge::xof::shake256_hex(phrase.as_bytes(), 32)?;
//!     assert_eq!(digest.len(), 64);
//!
//!     ctx.destroy();
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module | Contents |
//! |---|---|
//! | [`util`] | secure erasure, hex codec |
//! | [`xof`] | SHAKE256 one-shot and incremental hashing |
//! | [`rand`] | entropy context, random bytes, integers, nonces, tokens |
//! | [`passgen`] | passwords and passphrases |
//! | [`kdf`] | key stretching and verification |
//!
//! Errors from every crate convert into [`Error`], whose [`Error::kind`]
//! groups them into [`ErrorKind`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod info;

pub mod support;

pub use error::{Error, ErrorKind};
pub use info::{VERSION, info, version};

pub use sponge_kdf as kdf;
pub use sponge_passgen as passgen;
pub use sponge_rand as rand;
pub use sponge_util as util;
pub use sponge_xof as xof;
