// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word - the 32/64-bit word abstraction the engine is generic over.
//!
//! Everything width-specific (rotation amounts, byte length, round count)
//! lives in the [`Word`] impls, so the scheduler and compression core are
//! written once for both halves of the family.

use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not, Shr};

use vellum_util::{u32_from_be, u32_to_be, u64_from_be, u64_to_be};

/// A SHA-2 word: `u32` for SHA-224/256, `u64` for the SHA-512 family.
pub(crate) trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: usize;

    /// Block length in bytes (16 words)
    const BLOCK_LEN: usize = Self::BYTES * 16;

    /// Σ0 rotation amounts
    const BIG_SIGMA_0: (u32, u32, u32);

    /// Σ1 rotation amounts
    const BIG_SIGMA_1: (u32, u32, u32);

    /// σ0 rotation, rotation, shift amounts
    const SMALL_SIGMA_0: (u32, u32, u32);

    /// σ1 rotation, rotation, shift amounts
    const SMALL_SIGMA_1: (u32, u32, u32);

    /// ROTR^n(x), 0 < n < BITS
    fn rotate_right(self, n: u32) -> Self;

    /// Addition modulo 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Reads word `index` of `block` as big-endian.
    ///
    /// Panics if the word lies outside `block`.
    fn load_be(block: &[u8], index: usize) -> Self;

    /// Writes the word big-endian into `out[..BYTES]`.
    ///
    /// Panics if `out` is shorter than `BYTES`.
    fn store_be(self, out: &mut [u8]);
}

impl Word for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;

    const BIG_SIGMA_0: (u32, u32, u32) = (2, 13, 22);
    const BIG_SIGMA_1: (u32, u32, u32) = (6, 11, 25);
    const SMALL_SIGMA_0: (u32, u32, u32) = (7, 18, 3);
    const SMALL_SIGMA_1: (u32, u32, u32) = (17, 19, 10);

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        u32::rotate_right(self, n)
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn load_be(block: &[u8], index: usize) -> Self {
        let mut tmp_word = [0u8; 4];
        tmp_word.copy_from_slice(&block[index * 4..(index + 1) * 4]);
        u32_from_be(&tmp_word)
    }

    #[inline(always)]
    fn store_be(self, out: &mut [u8]) {
        let mut tmp_word = [0u8; 4];
        u32_to_be(self, &mut tmp_word);
        out[..4].copy_from_slice(&tmp_word);
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;

    const BIG_SIGMA_0: (u32, u32, u32) = (28, 34, 39);
    const BIG_SIGMA_1: (u32, u32, u32) = (14, 18, 41);
    const SMALL_SIGMA_0: (u32, u32, u32) = (1, 8, 7);
    const SMALL_SIGMA_1: (u32, u32, u32) = (19, 61, 6);

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        u64::rotate_right(self, n)
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn load_be(block: &[u8], index: usize) -> Self {
        let mut tmp_word = [0u8; 8];
        tmp_word.copy_from_slice(&block[index * 8..(index + 1) * 8]);
        u64_from_be(&tmp_word)
    }

    #[inline(always)]
    fn store_be(self, out: &mut [u8]) {
        let mut tmp_word = [0u8; 8];
        u64_to_be(self, &mut tmp_word);
        out[..8].copy_from_slice(&tmp_word);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHA-2 functions per FIPS 180-4 Sections 4.1.2 and 4.1.3
// ═══════════════════════════════════════════════════════════════════════════════

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
#[inline(always)]
pub(crate) fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
#[inline(always)]
pub(crate) fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0(x) = ROTR^2 ⊕ ROTR^13 ⊕ ROTR^22 (32-bit), ROTR^28 ⊕ ROTR^34 ⊕ ROTR^39 (64-bit)
#[inline(always)]
pub(crate) fn big_sigma_0<W: Word>(x: W) -> W {
    let (r1, r2, r3) = W::BIG_SIGMA_0;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ x.rotate_right(r3)
}

/// Σ1(x) = ROTR^6 ⊕ ROTR^11 ⊕ ROTR^25 (32-bit), ROTR^14 ⊕ ROTR^18 ⊕ ROTR^41 (64-bit)
#[inline(always)]
pub(crate) fn big_sigma_1<W: Word>(x: W) -> W {
    let (r1, r2, r3) = W::BIG_SIGMA_1;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ x.rotate_right(r3)
}

/// σ0(x) = ROTR^7 ⊕ ROTR^18 ⊕ SHR^3 (32-bit), ROTR^1 ⊕ ROTR^8 ⊕ SHR^7 (64-bit)
#[inline(always)]
pub(crate) fn small_sigma_0<W: Word>(x: W) -> W {
    let (r1, r2, s) = W::SMALL_SIGMA_0;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ (x >> s)
}

/// σ1(x) = ROTR^17 ⊕ ROTR^19 ⊕ SHR^10 (32-bit), ROTR^19 ⊕ ROTR^61 ⊕ SHR^6 (64-bit)
#[inline(always)]
pub(crate) fn small_sigma_1<W: Word>(x: W) -> W {
    let (r1, r2, s) = W::SMALL_SIGMA_1;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ (x >> s)
}
