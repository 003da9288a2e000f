// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use sponge_rand::{EntropyContext, EntropySource};
use sponge_util::secure_zero_vec;

use crate::consts::{PASSPHRASE_MAX_WORDS, PASSPHRASE_MIN_WORDS};
use crate::error::PassgenError;

/// Word list for [`generate_passphrase`]. Each word carries 6 bits.
pub const WORDLIST: [&str; 64] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega", "red", "blue", "green", "yellow", "purple", "orange", "black", "white", "cat",
    "dog", "bird", "fish", "lion", "tiger", "bear", "eagle", "mountain", "river", "ocean",
    "forest", "desert", "storm", "fire", "water", "sun", "moon", "star", "planet", "galaxy",
    "universe", "space", "light", "crypto", "secure", "random", "cipher", "hash", "key", "chain",
    "block",
];

/// Generates `num_words` words from [`WORDLIST`] joined by `separator`.
///
/// The separator appears between words only.
///
/// # Errors
///
/// - [`PassgenError::WordCountOutOfRange`] unless `3 <= num_words <= 20`.
/// - [`PassgenError::Rand`] if a draw fails. Nothing partial is returned.
pub fn generate_passphrase<E: EntropySource>(
    ctx: &EntropyContext<E>,
    num_words: usize,
    separator: char,
) -> Result<String, PassgenError> {
    if !(PASSPHRASE_MIN_WORDS..=PASSPHRASE_MAX_WORDS).contains(&num_words) {
        return Err(PassgenError::WordCountOutOfRange {
            count: num_words,
            min: PASSPHRASE_MIN_WORDS,
            max: PASSPHRASE_MAX_WORDS,
        });
    }

    let mut out = String::new();

    for position in 0..num_words {
        let index = match ctx.random_int(WORDLIST.len() as u32) {
            Ok(index) => index as usize,
            Err(err) => {
                let mut partial = out.into_bytes();
                secure_zero_vec(&mut partial);
                tracing::warn!(num_words, "passphrase generation failed");
                return Err(err.into());
            }
        };

        if position > 0 {
            out.push(separator);
        }
        out.push_str(WORDLIST[index]);
    }

    Ok(out)
}
