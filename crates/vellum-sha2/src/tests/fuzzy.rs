// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use sha2::Digest as _;

use crate::hash;
use crate::padding::Blocks;
use crate::variant::VariantId;

fn reference(id: VariantId, data: &[u8]) -> Vec<u8> {
    match id {
        VariantId::Sha224 => sha2::Sha224::digest(data).to_vec(),
        VariantId::Sha256 => sha2::Sha256::digest(data).to_vec(),
        VariantId::Sha384 => sha2::Sha384::digest(data).to_vec(),
        VariantId::Sha512 => sha2::Sha512::digest(data).to_vec(),
        VariantId::Sha512Trunc224 => sha2::Sha512_224::digest(data).to_vec(),
        VariantId::Sha512Trunc256 => sha2::Sha512_256::digest(data).to_vec(),
        VariantId::Sha512Modified => unreachable!("no reference implementation"),
    }
}

fn standard_variant() -> impl Strategy<Value = VariantId> {
    prop::sample::select(vec![
        VariantId::Sha224,
        VariantId::Sha256,
        VariantId::Sha384,
        VariantId::Sha512,
        VariantId::Sha512Trunc224,
        VariantId::Sha512Trunc256,
    ])
}

proptest! {
    #[test]
    fn matches_reference_implementation(
        id in standard_variant(),
        data in prop::collection::vec(any::<u8>(), 0..600),
    ) {
        let digest = hash(&data, id);
        let expected = reference(id, &data);
        prop_assert_eq!(digest.as_ref(), expected.as_slice());
    }

    #[test]
    fn hashing_is_deterministic(
        data in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        for id in VariantId::ALL {
            prop_assert_eq!(hash(&data, id), hash(&data, id));
        }
    }

    #[test]
    fn flipping_a_bit_changes_digest(
        data in prop::collection::vec(any::<u8>(), 1..300),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut flipped = data.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;

        for id in VariantId::ALL {
            prop_assert_ne!(hash(&data, id), hash(&flipped, id));
        }
    }

    #[test]
    fn sha224_is_not_a_prefix_of_sha256(
        data in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let short = hash(&data, VariantId::Sha224);
        let long = hash(&data, VariantId::Sha256);
        prop_assert_ne!(short.as_ref(), &long.as_ref()[..28]);
    }

    #[test]
    fn sha384_is_not_a_prefix_of_sha512(
        data in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let short = hash(&data, VariantId::Sha384);
        let long = hash(&data, VariantId::Sha512);
        prop_assert_ne!(short.as_ref(), &long.as_ref()[..48]);
    }

    #[test]
    fn padded_length_is_whole_blocks(len in 0usize..2048) {
        let data = vec![0u8; len];
        for block_len in [64, 128] {
            let total: usize = Blocks::new(&data, block_len).map(|b| b.as_ref().len()).sum();
            prop_assert_eq!(total % block_len, 0);
            prop_assert!(total >= len + 1 + block_len / 8);
            prop_assert!(total < len + 1 + block_len / 8 + block_len);
        }
    }
}
