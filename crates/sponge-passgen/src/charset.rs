// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ops::{BitOr, BitOrAssign};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*-_+=[]{}()|:;<>?,./";

/// Selection of character groups for [`generate_password`](crate::generate_password).
///
/// Bits outside [`CharsetFlags::ALL`] are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharsetFlags(u8);

impl CharsetFlags {
    /// `a-z`
    pub const LOWERCASE: Self = Self(1);
    /// `A-Z`
    pub const UPPERCASE: Self = Self(2);
    /// `0-9`
    pub const DIGITS: Self = Self(4);
    /// `!@#$%^&*-_+=[]{}()|:;<>?,./`
    pub const SYMBOLS: Self = Self(8);
    /// Every group.
    pub const ALL: Self = Self(15);

    /// Builds flags from a raw bitmask. Unknown bits are kept but ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every group in `other` is selected.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no known group is selected.
    pub const fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }

    /// Concatenates the selected groups in canonical order: lowercase,
    /// uppercase, digits, symbols.
    pub(crate) fn build_charset(self) -> Vec<u8> {
        let groups = [
            (Self::LOWERCASE, LOWERCASE),
            (Self::UPPERCASE, UPPERCASE),
            (Self::DIGITS, DIGITS),
            (Self::SYMBOLS, SYMBOLS),
        ];

        let mut charset = Vec::with_capacity(LOWERCASE.len() * 2 + DIGITS.len() + SYMBOLS.len());
        for (flag, group) in groups {
            if self.contains(flag) {
                charset.extend_from_slice(group);
            }
        }

        charset
    }
}

impl BitOr for CharsetFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CharsetFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
