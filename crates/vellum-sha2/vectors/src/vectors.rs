// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::TestCase;

const ABC: &[u8] = b"abc";
const TWO_BLOCK_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";
const FOX_DOT: &[u8] = b"The quick brown fox jumps over the lazy dog.";
const FOX_FIVE: &[u8] = b"The quick brown fox jumps over the lazy dog The quick brown fox jumps \
over the lazy dog The quick brown fox jumps over the lazy dog The quick brown fox jumps \
over the lazy dog The quick brown fox jumps over the lazy dog";

macro_rules! tc {
    ($id:expr, $comment:expr, $alg:expr, $chunk:expr, $repeat:expr, $digest:expr) => {
        TestCase {
            tc_id: $id,
            comment: $comment,
            algorithm: $alg,
            chunk: $chunk,
            repeat: $repeat,
            digest: $digest,
        }
    };
}

/// Every published vector, grouped by message
pub fn test_vectors() -> Vec<TestCase> {
    vec![
        // Empty message
        tc!(1, "empty", "SHA-224", b"", 1,
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"),
        tc!(2, "empty", "SHA-256", b"", 1,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        tc!(3, "empty", "SHA-384", b"", 1,
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"),
        tc!(4, "empty", "SHA-512", b"", 1,
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"),
        tc!(5, "empty", "SHA-512/224", b"", 1,
            "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"),
        tc!(6, "empty", "SHA-512/256", b"", 1,
            "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"),
        // One block
        tc!(7, "abc", "SHA-224", ABC, 1,
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
        tc!(8, "abc", "SHA-256", ABC, 1,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
        tc!(9, "abc", "SHA-384", ABC, 1,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"),
        tc!(10, "abc", "SHA-512", ABC, 1,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"),
        tc!(11, "abc", "SHA-512/224", ABC, 1,
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"),
        tc!(12, "abc", "SHA-512/256", ABC, 1,
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"),
        // 56 bytes: padding spills into a second 64-byte block
        tc!(13, "448-bit message", "SHA-224", TWO_BLOCK_448, 1,
            "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"),
        tc!(14, "448-bit message", "SHA-256", TWO_BLOCK_448, 1,
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
        tc!(15, "448-bit message", "SHA-384", TWO_BLOCK_448, 1,
            "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b"),
        tc!(16, "448-bit message", "SHA-512", TWO_BLOCK_448, 1,
            "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445"),
        // 112 bytes: padding spills into a second 128-byte block
        tc!(17, "896-bit message", "SHA-224", TWO_BLOCK_896, 1,
            "c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3"),
        tc!(18, "896-bit message", "SHA-256", TWO_BLOCK_896, 1,
            "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"),
        tc!(19, "896-bit message", "SHA-384", TWO_BLOCK_896, 1,
            "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"),
        tc!(20, "896-bit message", "SHA-512", TWO_BLOCK_896, 1,
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"),
        tc!(21, "896-bit message", "SHA-512/224", TWO_BLOCK_896, 1,
            "23fec5bb94d60b23308192640b0c453335d664734fe40e7268674af9"),
        tc!(22, "896-bit message", "SHA-512/256", TWO_BLOCK_896, 1,
            "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a"),
        // Long message
        tc!(23, "one million 'a'", "SHA-224", b"a", 1_000_000,
            "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"),
        tc!(24, "one million 'a'", "SHA-256", b"a", 1_000_000,
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"),
        tc!(25, "one million 'a'", "SHA-384", b"a", 1_000_000,
            "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985"),
        tc!(26, "one million 'a'", "SHA-512", b"a", 1_000_000,
            "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"),
        // Pangram, and a single appended byte for avalanche
        tc!(27, "pangram", "SHA-224", FOX, 1,
            "730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525"),
        tc!(28, "pangram", "SHA-256", FOX, 1,
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"),
        tc!(29, "pangram", "SHA-512", FOX, 1,
            "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb642e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6"),
        tc!(30, "pangram with period", "SHA-224", FOX_DOT, 1,
            "619cba8e8e05826e9b8c519c0a5c68f4fb653e8a3d8aa04bb2c8cd4c"),
        tc!(31, "pangram with period", "SHA-256", FOX_DOT, 1,
            "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c"),
        tc!(32, "pangram with period", "SHA-512", FOX_DOT, 1,
            "91ea1245f20d46ae9a037a989f54f1f790f0a47607eeb8a14d12890cea77a1bbc6c7ed9cf205e67b7f2b8fd4c7dfd3a7a8617e45f3c463d481c7e586c39ac1ed"),
        tc!(33, "uppercase", "SHA-256", b"ABC", 1,
            "b5d4045c3f466fa91fe2cc6abe79232a1a57cdf104f7a26e716e0a1e2789df78"),
        // 219 bytes, four 64-byte blocks
        tc!(34, "pangram five times", "SHA-256", FOX_FIVE, 1,
            "86c55ba51d6b4aef51f4ae956077a0f661d0b876c5774fef3172c4f56092cbbd"),
    ]
}

#[cfg(test)]
mod tests {
    use super::test_vectors;
    use crate::ALGORITHMS;

    #[test]
    fn test_ids_are_unique_and_sequential() {
        for (i, tc) in test_vectors().iter().enumerate() {
            assert_eq!(tc.tc_id, i + 1);
        }
    }

    #[test]
    fn test_digest_lengths_match_algorithm() {
        for tc in test_vectors() {
            assert!(ALGORITHMS.contains(&tc.algorithm), "{}", tc.algorithm);

            let expected_bytes = match tc.algorithm {
                "SHA-224" | "SHA-512/224" => 28,
                "SHA-256" | "SHA-512/256" => 32,
                "SHA-384" => 48,
                _ => 64,
            };
            assert_eq!(tc.expected().len(), expected_bytes, "tc_id {}", tc.tc_id);
        }
    }

    #[test]
    fn test_spill_messages_have_expected_lengths() {
        assert_eq!(super::TWO_BLOCK_448.len(), 56);
        assert_eq!(super::TWO_BLOCK_896.len(), 112);
        assert_eq!(super::FOX_FIVE.len(), 5 * 43 + 4);
    }
}
