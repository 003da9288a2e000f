// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secure erasure of sensitive buffers.

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

/// Overwrites every byte of `buf` with zero.
///
/// Uses `write_bytes` (memset) followed by a volatile read and a
/// `SeqCst` compiler fence, so the stores cannot be removed as dead code
/// even when nothing reads `buf` afterwards. The buffer stays valid and
/// may be reused.
///
/// No-op on an empty slice.
///
/// # Example
///
/// ```
/// use sponge_util::{is_slice_zeroized, secure_zero};
///
/// let mut key = [0xABu8; 32];
/// secure_zero(&mut key);
/// assert!(is_slice_zeroized(&key));
/// ```
#[inline(always)]
pub fn secure_zero(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    unsafe {
        // SAFETY: `buf` is an exclusive borrow valid for `buf.len()` bytes.
        core::ptr::write_bytes(buf.as_mut_ptr(), 0, buf.len());
        // Volatile read keeps the memset observable
        core::ptr::read_volatile(buf.as_ptr());
    }

    compiler_fence(Ordering::SeqCst);
}

/// Zeroes the **entire allocation** of a `Vec<u8>`, spare capacity included.
///
/// Bytes between `len()` and `capacity()` may still hold data left behind by
/// `truncate()` or a previous `clear()`; they are wiped as well. Length and
/// capacity are left unchanged.
///
/// # Example
///
/// ```
/// use sponge_util::{is_vec_fully_zeroized, secure_zero_vec};
///
/// let mut token = vec![0xFFu8; 64];
/// token.truncate(16);
///
/// secure_zero_vec(&mut token);
/// assert!(is_vec_fully_zeroized(&token));
/// ```
#[inline(always)]
pub fn secure_zero_vec(vec: &mut Vec<u8>) {
    let cap = vec.capacity();
    if cap == 0 {
        return;
    }

    unsafe {
        // SAFETY: the allocation is valid for `cap` bytes and u8 has no
        // invalid bit patterns.
        core::ptr::write_bytes(vec.as_mut_ptr(), 0, cap);
        core::ptr::read_volatile(vec.as_ptr());
    }

    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of `slice` is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation of `vec` (0..capacity) is zero.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    (0..vec.capacity()).all(|i| unsafe {
        // SAFETY: `i < capacity` and the allocation is valid for reads of
        // `capacity` bytes; u8 has no invalid bit patterns.
        *base.add(i) == 0
    })
}
