// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Published SHA-2 test vectors and a runner shared by every backend.
//!
//! Backends plug in through a closure mapping `(algorithm, message)` to a
//! digest, so the table stays independent of any engine crate.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
//! [2] NIST Cryptographic Standards and Guidelines: Examples with Intermediate Values
//!     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values
//! [3] RFC 6234, Section 8.5 test vectors
//!     https://www.rfc-editor.org/rfc/rfc6234.html#section-8.5

#![warn(missing_docs)]

mod vectors;

use vellum_util::{bytes_to_hex, hex_to_bytes};

pub use vectors::test_vectors;

/// Algorithm names used in the table
pub const ALGORITHMS: [&str; 6] = [
    "SHA-224",
    "SHA-256",
    "SHA-384",
    "SHA-512",
    "SHA-512/224",
    "SHA-512/256",
];

/// A single published test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Unique test case identifier
    pub tc_id: usize,
    /// Human-readable description
    pub comment: &'static str,
    /// Canonical algorithm name, one of [`ALGORITHMS`]
    pub algorithm: &'static str,
    /// Message chunk
    pub chunk: &'static [u8],
    /// Number of times `chunk` is repeated to form the message
    pub repeat: usize,
    /// Expected digest (lowercase hex)
    pub digest: &'static str,
}

impl TestCase {
    /// Full message bytes (`chunk` repeated `repeat` times)
    pub fn message(&self) -> Vec<u8> {
        self.chunk.repeat(self.repeat)
    }

    /// Expected digest bytes
    pub fn expected(&self) -> Vec<u8> {
        hex_to_bytes(self.digest)
    }
}

/// Runs one test case through `hash_fn`.
///
/// `hash_fn` receives the algorithm name and message and returns the digest
/// bytes, or `None` if the backend does not support the algorithm.
pub fn run_test_case<F>(tc: &TestCase, hash_fn: &mut F) -> Result<(), String>
where
    F: FnMut(&str, &[u8]) -> Option<Vec<u8>>,
{
    let message = tc.message();

    match hash_fn(tc.algorithm, &message) {
        Some(out) if out == tc.expected() => Ok(()),
        Some(out) => Err(format!(
            "tc_id {} ({} {}): digest mismatch\n  expected: {}\n  got:      {}",
            tc.tc_id,
            tc.algorithm,
            tc.comment,
            tc.digest,
            bytes_to_hex(&out, false)
        )),
        None => Err(format!(
            "tc_id {} ({} {}): algorithm not supported by backend",
            tc.tc_id, tc.algorithm, tc.comment
        )),
    }
}

/// Runs every vector accepted by `filter` and returns the failure messages.
pub fn run_filtered<P, F>(mut filter: P, mut hash_fn: F) -> Vec<String>
where
    P: FnMut(&TestCase) -> bool,
    F: FnMut(&str, &[u8]) -> Option<Vec<u8>>,
{
    test_vectors()
        .iter()
        .filter(|tc| filter(tc))
        .filter_map(|tc| run_test_case(tc, &mut hash_fn).err())
        .collect()
}

/// Runs the whole table and panics with every failure listed.
pub fn run_fips_vectors<F>(hash_fn: F)
where
    F: FnMut(&str, &[u8]) -> Option<Vec<u8>>,
{
    let total = test_vectors().len();
    let failures = run_filtered(|_| true, hash_fn);

    if !failures.is_empty() {
        panic!(
            "SHA-2 FIPS vector failures ({}/{}):\n{}",
            failures.len(),
            total,
            failures.join("\n")
        );
    }
}
