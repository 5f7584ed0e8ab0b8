// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod try_hex_to_bytes_tests {
    use vellum_util::{HexError, try_hex_to_bytes};

    #[test]
    fn test_mixed_case() {
        assert_eq!(try_hex_to_bytes("aBcD"), Ok(vec![0xab, 0xcd]));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(try_hex_to_bytes(""), Ok(Vec::new()));
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(try_hex_to_bytes("abc"), Err(HexError::OddLength { len: 3 }));
    }

    #[test]
    fn test_invalid_high_nibble() {
        assert_eq!(
            try_hex_to_bytes("00zz"),
            Err(HexError::InvalidDigit { index: 2 })
        );
    }

    #[test]
    fn test_invalid_low_nibble() {
        assert_eq!(
            try_hex_to_bytes("0g"),
            Err(HexError::InvalidDigit { index: 1 })
        );
    }

    #[test]
    fn test_separator_rejected() {
        assert!(try_hex_to_bytes("de:ad").is_err());
    }
}
