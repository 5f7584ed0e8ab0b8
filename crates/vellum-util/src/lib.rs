// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-order and hex utilities.
//!
//! Word assembly is done with explicit shifts over fixed-size byte arrays,
//! so results never depend on the host's native endianness.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(test)]
mod tests;

mod error;

pub use error::HexError;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// Slices of different length compare unequal immediately.
///
/// # Example
///
/// ```
/// use vellum_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[inline(always)]
fn hex_digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts lowercase and uppercase digits, no separators.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] for odd-length input and
/// [`HexError::InvalidDigit`] for any character outside `0-9a-fA-F`.
///
/// # Example
///
/// ```
/// use vellum_util::{try_hex_to_bytes, HexError};
///
/// assert_eq!(try_hex_to_bytes("DEadbeef"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(try_hex_to_bytes("abc"), Err(HexError::OddLength { len: 3 }));
/// ```
pub fn try_hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength { len: raw.len() });
    }

    let mut out = Vec::with_capacity(raw.len() / 2);
    for (pair_idx, pair) in raw.chunks_exact(2).enumerate() {
        let index = pair_idx * 2;
        let hi = hex_digit_value(pair[0]).ok_or(HexError::InvalidDigit { index })?;
        let lo = hex_digit_value(pair[1]).ok_or(HexError::InvalidDigit { index: index + 1 })?;
        out.push((hi << 4) | lo);
    }

    Ok(out)
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
/// Meant for test vectors; use [`try_hex_to_bytes`] on untrusted input.
///
/// # Example
///
/// ```
/// use vellum_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match try_hex_to_bytes(hex) {
        Ok(bytes) => bytes,
        Err(e) => panic!("invalid hex string {hex:?}: {e}"),
    }
}

/// Writes `bytes` as hex digits into any [`fmt::Write`] sink.
///
/// Used by `Display`/`LowerHex`/`UpperHex` implementations so formatting
/// never allocates.
pub fn write_hex<W: fmt::Write>(out: &mut W, bytes: &[u8], uppercase: bool) -> fmt::Result {
    let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    for &b in bytes {
        out.write_char(digits[(b >> 4) as usize] as char)?;
        out.write_char(digits[(b & 0x0f) as usize] as char)?;
    }
    Ok(())
}

/// Renders `bytes` as a hex string without separators.
///
/// # Example
///
/// ```
/// use vellum_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad], false), "dead");
/// assert_eq!(bytes_to_hex(&[0xbe, 0xef], true), "BEEF");
/// ```
pub fn bytes_to_hex(bytes: &[u8], uppercase: bool) -> String {
    let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(digits[(b >> 4) as usize] as char);
        out.push(digits[(b & 0x0f) as usize] as char);
    }
    out
}

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Assembles a `", stringify!($type), "` from ", stringify!($size), " big-endian bytes.")]
        ///
        /// Built from shifts, independent of host byte order.
        #[inline(always)]
        pub fn $fn_from(bytes: &[u8; $size]) -> $type {
            let mut dst: $type = 0;
            for byte in bytes.iter() {
                dst = (dst << 8) | (*byte as $type);
            }
            dst
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as ", stringify!($size), " big-endian bytes.")]
        #[inline(always)]
        pub fn $fn_to(src: $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (src >> (8 * ($size - 1 - i))) as u8;
            }
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);
