// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length bounds for generated secrets.

/// Shortest password, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Longest password, in characters.
pub const PASSWORD_MAX_LEN: usize = 1024;

/// Fewest words in a passphrase.
pub const PASSPHRASE_MIN_WORDS: usize = 3;

/// Most words in a passphrase.
pub const PASSPHRASE_MAX_WORDS: usize = 20;
