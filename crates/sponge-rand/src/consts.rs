// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sizes and bounds used by the entropy context and derived primitives.

/// Size of the per-context seed absorbed into every request.
pub const SEED_STATE_LEN: usize = 256;

/// Size of the auxiliary entropy pool filled at context creation.
pub const ENTROPY_POOL_LEN: usize = 4096;

/// Bytes of fresh entropy read per output chunk; also the chunk size.
pub const RAW_ENTROPY_CHUNK: usize = 4096;

/// Length of a nonce in bytes.
pub const NONCE_LEN: usize = 8;

/// Length of a salt produced by [`EntropyContext::generate_salt`](crate::EntropyContext::generate_salt).
pub const SALT_LEN: usize = 16;

/// Shortest session token, in bytes.
pub const SESSION_TOKEN_MIN_LEN: usize = 16;

/// Longest session token, in bytes.
pub const SESSION_TOKEN_MAX_LEN: usize = 512;
