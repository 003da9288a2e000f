// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::format;

use sponge_util::is_slice_zeroized;

use super::constant_chunk;
use crate::consts::{ENTROPY_POOL_LEN, RAW_ENTROPY_CHUNK, SEED_STATE_LEN};
use crate::context::EntropyContext;
use crate::error::RandError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

fn constant_context(byte: u8) -> EntropyContext<MockEntropySource> {
    EntropyContext::with_source(MockEntropySource::new(MockEntropySourceBehaviour::Constant(
        byte,
    )))
    .expect("Failed to EntropyContext::with_source(..)")
}

// Creation

#[test]
fn test_new_context_produces_bytes() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let a = ctx.random_bytes(32).expect("Failed to random_bytes(..)");
    let b = ctx.random_bytes(32).expect("Failed to random_bytes(..)");

    assert_eq!(a.len(), 32);
    assert_ne!(a, b);

    ctx.destroy();
}

#[test]
fn test_independent_contexts_diverge() {
    let ctx_a = EntropyContext::new().expect("Failed to EntropyContext::new()");
    let ctx_b = EntropyContext::new().expect("Failed to EntropyContext::new()");

    let a = ctx_a.random_bytes(64).expect("Failed to random_bytes(..)");
    let b = ctx_b.random_bytes(64).expect("Failed to random_bytes(..)");

    assert_ne!(a, b);
}

#[test]
fn test_with_source_reads_seed_then_pool() {
    let ctx = constant_context(0x11);

    assert_eq!(ctx.source().call_count(), 2);
    assert_eq!(ctx.seed_state().len(), SEED_STATE_LEN);
    assert_eq!(ctx.entropy_pool().len(), ENTROPY_POOL_LEN);
    assert!(ctx.seed_state().iter().all(|&b| b == 0x11));
    assert!(ctx.entropy_pool().iter().all(|&b| b == 0x11));
}

#[test]
fn test_with_source_fails_when_seed_read_fails() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(1));

    let result = EntropyContext::with_source(source);

    assert!(matches!(result, Err(RandError::EntropySourceUnavailable)));
}

#[test]
fn test_with_source_fails_when_pool_read_fails() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));

    let result = EntropyContext::with_source(source);

    assert!(matches!(result, Err(RandError::EntropySourceUnavailable)));
}

// Generation

#[test]
fn test_random_bytes_rejects_empty_request() {
    let ctx = EntropyContext::new().expect("Failed to EntropyContext::new()");
    let mut empty = [];

    assert_eq!(ctx.random_bytes(0), Err(RandError::EmptyRequest));
    assert_eq!(ctx.fill_random_bytes(&mut empty), Err(RandError::EmptyRequest));
}

#[test]
fn test_random_bytes_absorbs_block_then_seed() {
    let ctx = constant_context(0x42);

    let out = ctx.random_bytes(64).expect("Failed to random_bytes(..)");

    assert_eq!(out, constant_chunk(0x42, 64));
}

#[test]
fn test_random_bytes_is_reproducible_with_fixed_entropy() {
    let ctx = constant_context(0x07);

    let a = ctx.random_bytes(100).expect("Failed to random_bytes(..)");
    let b = ctx.random_bytes(100).expect("Failed to random_bytes(..)");

    assert_eq!(a, b);
}

#[test]
fn test_random_bytes_chunks_at_raw_entropy_chunk() {
    let ctx = constant_context(0x42);
    let full_chunk = constant_chunk(0x42, RAW_ENTROPY_CHUNK);

    let out = ctx.random_bytes(5000).expect("Failed to random_bytes(..)");

    assert_eq!(out.len(), 5000);
    assert_eq!(&out[..RAW_ENTROPY_CHUNK], &full_chunk[..]);
    assert_eq!(&out[RAW_ENTROPY_CHUNK..], &full_chunk[..904]);
}

#[test]
fn test_random_bytes_reads_one_block_per_chunk() {
    let ctx = constant_context(0x00);

    ctx.source().reset_count();
    ctx.random_bytes(1).expect("Failed to random_bytes(..)");
    assert_eq!(ctx.source().call_count(), 1);

    ctx.source().reset_count();
    ctx.random_bytes(RAW_ENTROPY_CHUNK).expect("Failed to random_bytes(..)");
    assert_eq!(ctx.source().call_count(), 1);

    ctx.source().reset_count();
    ctx.random_bytes(RAW_ENTROPY_CHUNK + 1).expect("Failed to random_bytes(..)");
    assert_eq!(ctx.source().call_count(), 2);

    ctx.source().reset_count();
    ctx.random_bytes(3 * RAW_ENTROPY_CHUNK).expect("Failed to random_bytes(..)");
    assert_eq!(ctx.source().call_count(), 3);
}

#[test]
fn test_fill_random_bytes_leaves_output_untouched_on_failure() {
    // Calls 1 and 2 seed the context, 3 feeds the first chunk.
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(4));
    let ctx = EntropyContext::with_source(source).expect("Failed to EntropyContext::with_source(..)");
    let mut out = [0xaau8; 5000];

    let result = ctx.fill_random_bytes(&mut out);

    assert_eq!(result, Err(RandError::EntropySourceUnavailable));
    assert!(out.iter().all(|&b| b == 0xaa));
}

#[test]
fn test_random_bytes_failure_is_not_sticky() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let ctx = EntropyContext::with_source(source).expect("Failed to EntropyContext::with_source(..)");

    assert_eq!(ctx.random_bytes(16), Err(RandError::EntropySourceUnavailable));
    assert_eq!(ctx.random_bytes(16).map(|b| b.len()), Ok(16));
}

// Lifecycle

#[test]
fn test_wipe_zeroes_seed_material() {
    let mut ctx = constant_context(0xff);

    ctx.wipe();

    assert!(is_slice_zeroized(ctx.seed_state()));
    assert!(is_slice_zeroized(ctx.entropy_pool()));

    // Wiping twice is harmless; drop wipes a third time.
    ctx.wipe();
    assert!(is_slice_zeroized(ctx.seed_state()));
}

#[test]
fn test_destroy_consumes_context() {
    let ctx = constant_context(0x33);

    ctx.destroy();
}

#[test]
fn test_debug_is_redacted() {
    let ctx = constant_context(0x42);

    let printed = format!("{:?}", ctx);

    assert_eq!(printed, "EntropyContext([REDACTED])");
    assert!(!printed.contains("42"));
}

#[test]
fn test_context_is_send() {
    fn assert_send<T: Send>() {}

    assert_send::<EntropyContext>();
}
