// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 family hash engine.
//!
//! One-shot hashing of a fully available buffer under SHA-224, SHA-256,
//! SHA-384, SHA-512, SHA-512/224, SHA-512/256 or the modified-IV SHA-512
//! used to derive SHA-512/t initial values. The 32-bit and 64-bit halves of
//! the family share one generic scheduler and compression core; everything
//! variant-specific comes from the catalog.
//!
//! ```
//! use vellum_sha2::{VariantId, hash};
//!
//! let digest = hash(b"abc", VariantId::Sha256);
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod engine;
mod error;
mod padding;
mod schedule;
mod variant;
mod word;

pub use consts::MAX_DIGEST_LEN;
pub use digest::Digest;
pub use error::Sha2Error;
pub use variant::{Variant, VariantId};

/// Hashes `data` under `variant`.
///
/// Total: every byte buffer and every catalog variant produce a digest.
pub fn hash(data: &[u8], variant: VariantId) -> Digest {
    variant.variant().hash(data)
}

/// Hashes `data` under the variant called `name` (see [`VariantId`]'s
/// `FromStr` for accepted spellings).
///
/// # Errors
/// Returns [`Sha2Error::InvalidVariant`] before touching `data` if `name` is
/// not in the catalog.
pub fn hash_named(data: &[u8], name: &str) -> Result<Digest, Sha2Error> {
    let variant: VariantId = name.parse().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected hash request");
    })?;
    Ok(hash(data, variant))
}
