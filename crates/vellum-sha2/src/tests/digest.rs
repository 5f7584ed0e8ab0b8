// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::hash;
use crate::variant::VariantId;

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const ABC_SHA512_224: &str = "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa";

#[test]
fn test_digest_lengths() {
    for id in VariantId::ALL {
        let digest = hash(b"abc", id);
        assert_eq!(digest.len(), id.variant().digest_len(), "{id}");
        assert_eq!(digest.as_ref().len(), digest.len(), "{id}");
        assert!(!digest.is_empty());
        assert_eq!(digest.variant(), id);
    }
}

#[test]
fn test_hex_formatting() {
    let digest = hash(b"abc", VariantId::Sha256);

    assert_eq!(digest.to_hex(), ABC_SHA256);
    assert_eq!(format!("{digest}"), ABC_SHA256);
    assert_eq!(format!("{digest:x}"), ABC_SHA256);
    assert_eq!(format!("{digest:X}"), ABC_SHA256.to_uppercase());
    assert_eq!(format!("{digest:?}"), format!("SHA-256:{ABC_SHA256}"));
}

#[test]
fn test_half_truncated_digest_is_28_bytes() {
    let digest = hash(b"abc", VariantId::Sha512Trunc224);

    assert_eq!(digest.len(), 28);
    assert_eq!(digest.to_hex(), ABC_SHA512_224);
}

#[test]
fn test_matches_hex() {
    let digest = hash(b"abc", VariantId::Sha256);

    assert!(digest.matches_hex(ABC_SHA256));
    assert!(digest.matches_hex(&ABC_SHA256.to_uppercase()));
    assert!(digest.matches_hex(&format!("  {ABC_SHA256}\n")));
}

#[test]
fn test_matches_hex_rejects() {
    let digest = hash(b"abc", VariantId::Sha256);

    // Truncated
    assert!(!digest.matches_hex(&ABC_SHA256[..62]));
    // Odd length
    assert!(!digest.matches_hex(&ABC_SHA256[..63]));
    // Non-hex
    assert!(!digest.matches_hex(&ABC_SHA256.replace('a', "g")));
    // Single bit flipped in the last byte
    assert!(!digest.matches_hex(&ABC_SHA256.replace("15ad", "15ac")));
    assert!(!digest.matches_hex(""));
}

#[test]
fn test_equality_includes_variant() {
    let a = hash(b"abc", VariantId::Sha512);
    let b = hash(b"abc", VariantId::Sha512);
    let c = hash(b"abd", VariantId::Sha512);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let modified = hash(b"abc", VariantId::Sha512Modified);
    assert_ne!(a, modified);
}

#[test]
fn test_digest_is_copy() {
    let a = hash(b"", VariantId::Sha384);
    let b = a;
    assert_eq!(a.to_hex(), b.to_hex());
}
