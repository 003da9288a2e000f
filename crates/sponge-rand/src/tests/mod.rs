// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod context;
mod derived;

use alloc::vec;
use alloc::vec::Vec;

use crate::consts::{RAW_ENTROPY_CHUNK, SEED_STATE_LEN};

/// First `len` bytes of a chunk produced when every entropy read returns
/// `byte`.
pub(crate) fn constant_chunk(byte: u8, len: usize) -> Vec<u8> {
    let mut input = vec![byte; RAW_ENTROPY_CHUNK];
    input.extend_from_slice(&[byte; SEED_STATE_LEN]);

    sponge_xof::shake256_to_vec(&input, len).expect("Failed to shake256_to_vec(..)")
}
