// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version, e.g. `"0.1.0"`.
pub fn version() -> &'static str {
    VERSION
}

/// Returns a one-line summary of the library and its primitives.
pub fn info() -> &'static str {
    concat!(
        "sponge ",
        env!("CARGO_PKG_VERSION"),
        ": SHAKE256 entropy contexts, password and passphrase generation, ",
        "iterated SHAKE256 key derivation, secure erasure"
    )
}
