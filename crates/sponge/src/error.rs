// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sponge_kdf::KdfError;
use sponge_passgen::PassgenError;
use sponge_rand::RandError;
use sponge_util::HexError;
use sponge_xof::XofError;
use thiserror::Error;

/// Broad classification of every sponge error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The entropy source failed or returned too few bytes.
    EntropySourceUnavailable,
    /// An argument was outside its accepted range.
    InvalidArgument,
    /// A key derivation was requested with zero iterations.
    InvalidIterationCount,
    /// Hex input was malformed.
    DecodeError,
}

/// Any error produced by the sponge crates.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Hex codec error.
    #[error(transparent)]
    Hex(#[from] HexError),

    /// Hashing error.
    #[error(transparent)]
    Xof(#[from] XofError),

    /// Random generation error.
    #[error(transparent)]
    Rand(#[from] RandError),

    /// Password or passphrase generation error.
    #[error(transparent)]
    Passgen(#[from] PassgenError),

    /// Key derivation error.
    #[error(transparent)]
    Kdf(#[from] KdfError),
}

impl Error {
    /// Returns the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Hex(err) => hex_kind(err),
            Self::Xof(err) => xof_kind(err),
            Self::Rand(err) => rand_kind(err),
            Self::Passgen(err) => passgen_kind(err),
            Self::Kdf(err) => kdf_kind(err),
        }
    }
}

fn hex_kind(err: &HexError) -> ErrorKind {
    match err {
        HexError::OddLength | HexError::InvalidHexCharacter { .. } => ErrorKind::DecodeError,
        HexError::EmptyInput | HexError::OutputTooLarge { .. } => ErrorKind::InvalidArgument,
    }
}

fn xof_kind(err: &XofError) -> ErrorKind {
    match err {
        XofError::EmptyOutput => ErrorKind::InvalidArgument,
        XofError::Encoding(hex) => hex_kind(hex),
    }
}

fn rand_kind(err: &RandError) -> ErrorKind {
    match err {
        RandError::EntropySourceUnavailable => ErrorKind::EntropySourceUnavailable,
        RandError::EmptyRequest | RandError::ZeroBound | RandError::TokenLengthOutOfRange { .. } => {
            ErrorKind::InvalidArgument
        }
        RandError::Encoding(hex) => hex_kind(hex),
    }
}

fn passgen_kind(err: &PassgenError) -> ErrorKind {
    match err {
        PassgenError::Rand(rand) => rand_kind(rand),
        PassgenError::LengthOutOfRange { .. }
        | PassgenError::WordCountOutOfRange { .. }
        | PassgenError::EmptyCharset => ErrorKind::InvalidArgument,
    }
}

fn kdf_kind(err: &KdfError) -> ErrorKind {
    match err {
        KdfError::InvalidIterationCount => ErrorKind::InvalidIterationCount,
        KdfError::EmptyKey => ErrorKind::InvalidArgument,
    }
}
