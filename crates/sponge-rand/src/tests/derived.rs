// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::constant_chunk;
use crate::consts::{SALT_LEN, SESSION_TOKEN_MAX_LEN, SESSION_TOKEN_MIN_LEN};
use crate::context::EntropyContext;
use crate::error::RandError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

fn constant_context(byte: u8) -> EntropyContext<MockEntropySource> {
    EntropyContext::with_source(MockEntropySource::new(MockEntropySourceBehaviour::Constant(
        byte,
    )))
    .expect("Failed to EntropyContext::with_source(..)")
}

fn failing_after_seed() -> EntropyContext<MockEntropySource> {
    EntropyContext::with_source(MockEntropySource::new(
        MockEntropySourceBehaviour::FailAtNthFillBytes(3),
    ))
    .expect("Failed to EntropyContext::with_source(..)")
}

// random_int

#[test]
fn test_random_int_rejects_zero_bound() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    assert_eq!(ctx.random_int(0), Err(RandError::ZeroBound));
}

#[test]
fn test_random_int_bound_one_is_always_zero() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    for _ in 0..64 {
        assert_eq!(ctx.random_int(1), Ok(0));
    }
}

#[test]
fn test_random_int_stays_below_bound() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    for _ in 0..1000 {
        let value = ctx.random_int(6).expect("Failed to random_int(..)");
        assert!(value < 6);
    }
}

#[test]
fn test_random_int_covers_small_range() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");
    let mut seen = [false; 4];

    for _ in 0..400 {
        let value = ctx.random_int(4).expect("Failed to random_int(..)");
        seen[value as usize] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_random_int_reads_little_endian() {
    let ctx = constant_context(0x42);
    let stream = constant_chunk(0x42, 4);
    let raw = u32::from_le_bytes([stream[0], stream[1], stream[2], stream[3]]);

    assert_eq!(ctx.random_int(1000), Ok(raw % 1000));
    assert_eq!(ctx.random_int(u32::MAX), Ok(raw % u32::MAX));
}

#[test]
fn test_random_int_propagates_entropy_failure() {
    let ctx = failing_after_seed();

    assert_eq!(ctx.random_int(10), Err(RandError::EntropySourceUnavailable));
}

// random_u64

#[test]
fn test_random_u64_reads_little_endian() {
    let ctx = constant_context(0x09);
    let stream = constant_chunk(0x09, 8);
    let mut expected = [0u8; 8];
    expected.copy_from_slice(&stream);

    assert_eq!(ctx.random_u64(), Ok(u64::from_le_bytes(expected)));
}

#[test]
fn test_random_u64_varies() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let a = ctx.random_u64().expect("Failed to random_u64()");
    let b = ctx.random_u64().expect("Failed to random_u64()");

    assert_ne!(a, b);
}

// generate_nonce

#[test]
fn test_generate_nonce_value_matches_bytes() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let nonce = ctx.generate_nonce().expect("Failed to generate_nonce()");

    assert_eq!(nonce.value, u64::from_le_bytes(nonce.bytes));
}

#[test]
fn test_generate_nonce_is_fresh() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let a = ctx.generate_nonce().expect("Failed to generate_nonce()");
    let b = ctx.generate_nonce().expect("Failed to generate_nonce()");

    assert_ne!(a, b);
}

#[test]
fn test_generate_nonce_failure_is_an_error() {
    let ctx = failing_after_seed();

    assert_eq!(ctx.generate_nonce(), Err(RandError::EntropySourceUnavailable));
}

// session_token

#[test]
fn test_session_token_length_bounds() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    assert_eq!(
        ctx.session_token(SESSION_TOKEN_MIN_LEN - 1),
        Err(RandError::TokenLengthOutOfRange {
            length: SESSION_TOKEN_MIN_LEN - 1,
            min: SESSION_TOKEN_MIN_LEN,
            max: SESSION_TOKEN_MAX_LEN,
        })
    );
    assert!(matches!(
        ctx.session_token(SESSION_TOKEN_MAX_LEN + 1),
        Err(RandError::TokenLengthOutOfRange { length: 513, .. })
    ));
    assert!(matches!(
        ctx.session_token(0),
        Err(RandError::TokenLengthOutOfRange { .. })
    ));

    let shortest = ctx
        .session_token(SESSION_TOKEN_MIN_LEN)
        .expect("Failed to session_token(..)");
    let longest = ctx
        .session_token(SESSION_TOKEN_MAX_LEN)
        .expect("Failed to session_token(..)");

    assert_eq!(shortest.len(), 16);
    assert_eq!(longest.len(), 512);
}

#[test]
fn test_session_token_hex_is_lowercase_and_twice_as_long() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let token = ctx.session_token_hex(32).expect("Failed to session_token_hex(..)");

    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn test_session_token_hex_matches_raw_stream() {
    let ctx = constant_context(0x42);
    let expected =
        sponge_util::bytes_to_hex(&constant_chunk(0x42, 16)).expect("Failed to bytes_to_hex(..)");

    assert_eq!(ctx.session_token_hex(16), Ok(expected));
}

#[test]
fn test_session_token_hex_rejects_out_of_range() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    assert!(matches!(
        ctx.session_token_hex(8),
        Err(RandError::TokenLengthOutOfRange { length: 8, .. })
    ));
}

// generate_salt

#[test]
fn test_generate_salt_is_random() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let a = ctx.generate_salt().expect("Failed to generate_salt()");
    let b = ctx.generate_salt().expect("Failed to generate_salt()");

    assert_eq!(a.len(), SALT_LEN);
    assert_ne!(a, b);
}
