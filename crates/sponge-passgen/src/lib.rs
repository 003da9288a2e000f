// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random passwords and passphrases.
//!
//! Every character and every word is picked with
//! [`EntropyContext::random_int`](sponge_rand::EntropyContext::random_int),
//! independently and with replacement.
//!
//! ```rust
//! use sponge_passgen::{CharsetFlags, generate_passphrase, generate_password};
//! use sponge_rand::EntropyContext;
//!
//! let ctx = EntropyContext::new().expect("Failed to create context");
//!
//! let password = generate_password(&ctx, CharsetFlags::LOWERCASE | CharsetFlags::DIGITS, 16)
//!     .expect("Failed to generate password");
//! assert_eq!(password.len(), 16);
//!
//! let phrase = generate_passphrase(&ctx, 4, '-').expect("Failed to generate passphrase");
//! assert_eq!(phrase.split('-').count(), 4);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod charset;
mod error;
mod passphrase;
mod password;

pub mod consts;

pub use charset::CharsetFlags;
pub use error::PassgenError;
pub use passphrase::{WORDLIST, generate_passphrase};
pub use password::generate_password;
