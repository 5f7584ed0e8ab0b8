// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Variant catalog and SHA-512/t IV bootstrap
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS), Section 5.3.6
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf

use std::thread;

use crate::consts::{SHA224_IV, SHA256_IV, SHA384_IV, SHA512_IV, SHA512_MODIFIED_IV};
use crate::error::Sha2Error;
use crate::hash;
use crate::variant::VariantId;

const SHA512_224_IV: [u64; 8] = [
    0x8C3D_37C8_1954_4DA2,
    0x73E1_9966_89DC_D4D6,
    0x1DFA_B7AE_32FF_9C82,
    0x679D_D514_582F_9FCF,
    0x0F6D_2B69_7BD4_4DA8,
    0x77E3_6F73_04C4_8942,
    0x3F9D_85A8_6A1D_36C8,
    0x1112_E6AD_91D6_92A1,
];

const SHA512_256_IV: [u64; 8] = [
    0x2231_2194_FC2B_F72C,
    0x9F55_5FA3_C84C_64C2,
    0x2393_B86B_6F53_B151,
    0x9638_7719_5940_EABD,
    0x9628_3EE2_A88E_FFE3,
    0xBE5E_1E25_5386_3992,
    0x2B01_99FC_2C85_B8AA,
    0x0EB7_2DDC_81C5_2CA2,
];

fn iv_bytes(iv: &[u64; 8]) -> Vec<u8> {
    iv.iter().flat_map(|w| w.to_be_bytes()).collect()
}

#[test]
fn test_catalog_geometry() {
    // (id, word bits, block len, rounds, emitted words, half, digest len)
    let table = [
        (VariantId::Sha224, 32, 64, 64, 7, false, 28),
        (VariantId::Sha256, 32, 64, 64, 8, false, 32),
        (VariantId::Sha384, 64, 128, 80, 6, false, 48),
        (VariantId::Sha512, 64, 128, 80, 8, false, 64),
        (VariantId::Sha512Trunc224, 64, 128, 80, 4, true, 28),
        (VariantId::Sha512Trunc256, 64, 128, 80, 4, false, 32),
        (VariantId::Sha512Modified, 64, 128, 80, 8, false, 64),
    ];

    for (id, bits, block_len, rounds, emitted, half, digest_len) in table {
        let v = id.variant();
        assert_eq!(v.id(), id);
        assert_eq!(v.word_bits(), bits, "{id}");
        assert_eq!(v.word_len(), bits as usize / 8, "{id}");
        assert_eq!(v.block_len(), block_len, "{id}");
        assert_eq!(v.round_count(), rounds, "{id}");
        assert_eq!(v.emitted_words(), emitted, "{id}");
        assert_eq!(v.half_truncates_last(), half, "{id}");
        assert_eq!(v.digest_len(), digest_len, "{id}");
    }
}

#[test]
fn test_all_lists_every_variant_once() {
    let mut ids = VariantId::ALL.to_vec();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}

#[test]
fn test_literal_initial_vectors() {
    assert_eq!(VariantId::Sha224.variant().initial_vector_u32(), Some(&SHA224_IV));
    assert_eq!(VariantId::Sha256.variant().initial_vector_u32(), Some(&SHA256_IV));
    assert_eq!(VariantId::Sha384.variant().initial_vector_u64(), Some(&SHA384_IV));
    assert_eq!(VariantId::Sha512.variant().initial_vector_u64(), Some(&SHA512_IV));
    assert_eq!(
        VariantId::Sha512Modified.variant().initial_vector_u64(),
        Some(&SHA512_MODIFIED_IV)
    );

    assert_eq!(VariantId::Sha256.variant().initial_vector_u64(), None);
    assert_eq!(VariantId::Sha512.variant().initial_vector_u32(), None);
}

#[test]
fn test_bootstrapped_initial_vectors() {
    let iv_224 = VariantId::Sha512Trunc224.variant().initial_vector_u64();
    let iv_256 = VariantId::Sha512Trunc256.variant().initial_vector_u64();

    println!("SHA-512/224 H(0):");
    println!("  Result:   {:016x?}", iv_224);
    println!("  Expected: {:016x?}", SHA512_224_IV);

    assert_eq!(iv_224, Some(&SHA512_224_IV));
    assert_eq!(iv_256, Some(&SHA512_256_IV));
}

#[test]
fn test_modified_hash_of_name_is_truncated_iv() {
    let digest = hash(b"SHA-512/256", VariantId::Sha512Modified);
    assert_eq!(digest.as_ref(), iv_bytes(&SHA512_256_IV).as_slice());

    let digest = hash(b"SHA-512/224", VariantId::Sha512Modified);
    assert_eq!(digest.as_ref(), iv_bytes(&SHA512_224_IV).as_slice());
}

#[test]
fn test_lookup_is_memoized() {
    for id in VariantId::ALL {
        assert!(std::ptr::eq(id.variant(), id.variant()), "{id}");
    }
}

#[test]
fn test_concurrent_bootstrap_agrees() {
    let seen: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    let id = if i % 2 == 0 {
                        VariantId::Sha512Trunc224
                    } else {
                        VariantId::Sha512Trunc256
                    };
                    id.variant() as *const _ as usize
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("Failed to join(..)"))
            .collect()
    });

    let ptr_224 = VariantId::Sha512Trunc224.variant() as *const _ as usize;
    let ptr_256 = VariantId::Sha512Trunc256.variant() as *const _ as usize;

    for (i, ptr) in seen.into_iter().enumerate() {
        let expected = if i % 2 == 0 { ptr_224 } else { ptr_256 };
        assert_eq!(ptr, expected, "thread {i}");
    }
}

#[test]
fn test_display_names() {
    let names: Vec<String> = VariantId::ALL.iter().map(|id| id.to_string()).collect();
    assert_eq!(
        names,
        [
            "SHA-224",
            "SHA-256",
            "SHA-384",
            "SHA-512",
            "SHA-512/224",
            "SHA-512/256",
            "SHA-512 (Modified)",
        ]
    );
}

#[test]
fn test_parse_round_trips_display() {
    for id in VariantId::ALL {
        assert_eq!(id.name().parse::<VariantId>(), Ok(id));
    }
}

#[test]
fn test_parse_accepts_common_spellings() {
    let cases = [
        ("sha256", VariantId::Sha256),
        ("SHA256", VariantId::Sha256),
        (" sha-224 ", VariantId::Sha224),
        ("Sha384", VariantId::Sha384),
        ("sha512_224", VariantId::Sha512Trunc224),
        ("SHA512/256", VariantId::Sha512Trunc256),
        ("sha512-mod", VariantId::Sha512Modified),
        ("sha512modified", VariantId::Sha512Modified),
    ];

    for (name, expected) in cases {
        assert_eq!(name.parse::<VariantId>(), Ok(expected), "{name:?}");
    }
}

#[test]
fn test_parse_rejects_unknown_names() {
    for name in ["", "md5", "sha1", "sha-3", "sha512/384", "sha-256x"] {
        assert_eq!(
            name.parse::<VariantId>(),
            Err(Sha2Error::InvalidVariant {
                name: name.to_string()
            }),
            "{name:?}"
        );
    }
}
