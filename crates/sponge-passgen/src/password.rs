// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use sponge_rand::{EntropyContext, EntropySource};
use sponge_util::secure_zero_vec;

use crate::charset::CharsetFlags;
use crate::consts::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
use crate::error::PassgenError;

/// Generates a password of `length` characters drawn from the groups in
/// `flags`.
///
/// # Errors
///
/// - [`PassgenError::LengthOutOfRange`] unless `8 <= length <= 1024`.
/// - [`PassgenError::EmptyCharset`] if `flags` selects no group.
/// - [`PassgenError::Rand`] if a draw fails. Nothing partial is returned.
pub fn generate_password<E: EntropySource>(
    ctx: &EntropyContext<E>,
    flags: CharsetFlags,
    length: usize,
) -> Result<String, PassgenError> {
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&length) {
        return Err(PassgenError::LengthOutOfRange {
            length,
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        });
    }

    if flags.is_empty() {
        return Err(PassgenError::EmptyCharset);
    }

    let mut charset = flags.build_charset();
    let mut out = String::with_capacity(length);
    let result = fill_from_charset(ctx, &charset, length, &mut out);

    secure_zero_vec(&mut charset);

    if let Err(err) = result {
        let mut partial = out.into_bytes();
        secure_zero_vec(&mut partial);
        tracing::warn!(length, "password generation failed");
        return Err(err);
    }

    Ok(out)
}

fn fill_from_charset<E: EntropySource>(
    ctx: &EntropyContext<E>,
    charset: &[u8],
    length: usize,
    out: &mut String,
) -> Result<(), PassgenError> {
    // At most 26 + 26 + 10 + 27 entries.
    let bound = charset.len() as u32;

    for _ in 0..length {
        let index = ctx.random_int(bound)? as usize;
        // Charset bytes are ASCII, one byte per char.
        out.push(char::from(charset[index]));
    }

    Ok(())
}
