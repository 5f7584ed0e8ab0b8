// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variant catalog.
//!
//! Every variant is static configuration: word width, round constants, H(0)
//! and output truncation. SHA-512/224 and SHA-512/256 have no literal H(0);
//! theirs is the full state of the modified-IV SHA-512 over the strings
//! `"SHA-512/224"` / `"SHA-512/256"` (FIPS 180-4 Section 5.3.6). That state
//! is computed on first lookup and published through a [`OnceLock`], so
//! concurrent first lookups bootstrap exactly once.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use crate::consts::{
    K32, K64, SHA224_IV, SHA256_IV, SHA384_IV, SHA512_224_PRIMING, SHA512_256_PRIMING, SHA512_IV,
    SHA512_MODIFIED_IV, STATE_WORDS,
};
use crate::digest::Digest;
use crate::engine::process;
use crate::error::Sha2Error;
use crate::word::Word;

/// Identifier of a SHA-2 family member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantId {
    /// SHA-224 (32-bit words, 7 output words)
    Sha224,
    /// SHA-256 (32-bit words, 8 output words)
    Sha256,
    /// SHA-384 (64-bit words, 6 output words)
    Sha384,
    /// SHA-512 (64-bit words, 8 output words)
    Sha512,
    /// SHA-512/224 (64-bit words, 3.5 output words)
    Sha512Trunc224,
    /// SHA-512/256 (64-bit words, 4 output words)
    Sha512Trunc256,
    /// SHA-512 with H(0) XORed with `0xa5a5a5a5a5a5a5a5`, the SHA-512/t IV
    /// generation function
    Sha512Modified,
}

impl VariantId {
    /// Every variant in the catalog, in declaration order
    pub const ALL: [VariantId; 7] = [
        VariantId::Sha224,
        VariantId::Sha256,
        VariantId::Sha384,
        VariantId::Sha512,
        VariantId::Sha512Trunc224,
        VariantId::Sha512Trunc256,
        VariantId::Sha512Modified,
    ];

    /// Canonical display name, e.g. `SHA-512/224`
    pub const fn name(self) -> &'static str {
        match self {
            VariantId::Sha224 => "SHA-224",
            VariantId::Sha256 => "SHA-256",
            VariantId::Sha384 => "SHA-384",
            VariantId::Sha512 => "SHA-512",
            VariantId::Sha512Trunc224 => "SHA-512/224",
            VariantId::Sha512Trunc256 => "SHA-512/256",
            VariantId::Sha512Modified => "SHA-512 (Modified)",
        }
    }

    /// Catalog lookup.
    ///
    /// O(1) after the first lookup of a truncated SHA-512 variant, which runs
    /// its IV bootstrap once.
    pub fn variant(self) -> &'static Variant {
        match self {
            VariantId::Sha224 => &SHA224,
            VariantId::Sha256 => &SHA256,
            VariantId::Sha384 => &SHA384,
            VariantId::Sha512 => &SHA512,
            VariantId::Sha512Modified => &SHA512_MODIFIED,
            VariantId::Sha512Trunc224 => SHA512_224.get_or_init(|| {
                bootstrap_truncated(VariantId::Sha512Trunc224, SHA512_224_PRIMING, 4, true)
            }),
            VariantId::Sha512Trunc256 => SHA512_256.get_or_init(|| {
                bootstrap_truncated(VariantId::Sha512Trunc256, SHA512_256_PRIMING, 4, false)
            }),
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantId {
    type Err = Sha2Error;

    /// Accepts canonical names and common spellings, case-insensitive:
    /// `SHA-256`, `sha256`, `sha512/224`, `sha512_224`, `SHA-512 (Modified)`,
    /// `sha512-mod`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '(' | ')'))
            .map(|c| if c == '_' { '/' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.as_str() {
            "sha224" => Ok(VariantId::Sha224),
            "sha256" => Ok(VariantId::Sha256),
            "sha384" => Ok(VariantId::Sha384),
            "sha512" => Ok(VariantId::Sha512),
            "sha512/224" => Ok(VariantId::Sha512Trunc224),
            "sha512/256" => Ok(VariantId::Sha512Trunc256),
            "sha512modified" | "sha512mod" => Ok(VariantId::Sha512Modified),
            _ => Err(Sha2Error::InvalidVariant {
                name: name.to_string(),
            }),
        }
    }
}

/// Width-specific parameters: round constants and H(0).
///
/// The round count is the length of `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Params {
    Words32 {
        k: &'static [u32; 64],
        iv: [u32; STATE_WORDS],
    },
    Words64 {
        k: &'static [u64; 80],
        iv: [u64; STATE_WORDS],
    },
}

/// Immutable per-variant configuration.
#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    id: VariantId,
    params: Params,
    emitted_words: usize,
    half_truncate_last: bool,
}

static SHA224: Variant = Variant {
    id: VariantId::Sha224,
    params: Params::Words32 {
        k: &K32,
        iv: SHA224_IV,
    },
    emitted_words: 7,
    half_truncate_last: false,
};

static SHA256: Variant = Variant {
    id: VariantId::Sha256,
    params: Params::Words32 {
        k: &K32,
        iv: SHA256_IV,
    },
    emitted_words: 8,
    half_truncate_last: false,
};

static SHA384: Variant = Variant {
    id: VariantId::Sha384,
    params: Params::Words64 {
        k: &K64,
        iv: SHA384_IV,
    },
    emitted_words: 6,
    half_truncate_last: false,
};

static SHA512: Variant = Variant {
    id: VariantId::Sha512,
    params: Params::Words64 {
        k: &K64,
        iv: SHA512_IV,
    },
    emitted_words: 8,
    half_truncate_last: false,
};

static SHA512_MODIFIED: Variant = Variant {
    id: VariantId::Sha512Modified,
    params: Params::Words64 {
        k: &K64,
        iv: SHA512_MODIFIED_IV,
    },
    emitted_words: 8,
    half_truncate_last: false,
};

static SHA512_224: OnceLock<Variant> = OnceLock::new();
static SHA512_256: OnceLock<Variant> = OnceLock::new();

/// Derives a truncated variant's H(0) from the modified-IV SHA-512 state over
/// `priming`.
fn bootstrap_truncated(
    id: VariantId,
    priming: &[u8],
    emitted_words: usize,
    half_truncate_last: bool,
) -> Variant {
    let iv = process(priming, &SHA512_MODIFIED_IV, &K64).into_words();

    tracing::debug!(variant = %id, h0 = iv[0], "bootstrapped initial hash value");

    Variant {
        id,
        params: Params::Words64 { k: &K64, iv },
        emitted_words,
        half_truncate_last,
    }
}

impl Variant {
    /// Variant identifier
    pub fn id(&self) -> VariantId {
        self.id
    }

    /// Word width in bits (32 or 64)
    pub fn word_bits(&self) -> u32 {
        match self.params {
            Params::Words32 { .. } => <u32 as Word>::BITS,
            Params::Words64 { .. } => <u64 as Word>::BITS,
        }
    }

    /// Word width in bytes (4 or 8)
    pub fn word_len(&self) -> usize {
        self.word_bits() as usize / 8
    }

    /// Block length in bytes (64 or 128)
    pub fn block_len(&self) -> usize {
        self.word_len() * 16
    }

    /// Number of compression rounds (64 or 80)
    pub fn round_count(&self) -> usize {
        match self.params {
            Params::Words32 { k, .. } => k.len(),
            Params::Words64 { k, .. } => k.len(),
        }
    }

    /// Number of state words emitted into the digest
    pub fn emitted_words(&self) -> usize {
        self.emitted_words
    }

    /// Whether only the upper half of the last emitted word is kept
    pub fn half_truncates_last(&self) -> bool {
        self.half_truncate_last
    }

    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        let full = self.emitted_words * self.word_len();
        if self.half_truncate_last {
            full - self.word_len() / 2
        } else {
            full
        }
    }

    /// H(0) for 32-bit word variants
    pub fn initial_vector_u32(&self) -> Option<&[u32; STATE_WORDS]> {
        match &self.params {
            Params::Words32 { iv, .. } => Some(iv),
            Params::Words64 { .. } => None,
        }
    }

    /// H(0) for 64-bit word variants
    pub fn initial_vector_u64(&self) -> Option<&[u64; STATE_WORDS]> {
        match &self.params {
            Params::Words32 { .. } => None,
            Params::Words64 { iv, .. } => Some(iv),
        }
    }

    /// Hashes `data` under this variant.
    pub fn hash(&self, data: &[u8]) -> Digest {
        match &self.params {
            Params::Words32 { k, iv } => Digest::from_state(self, &process(data, iv, &k[..])),
            Params::Words64 { k, iv } => Digest::from_state(self, &process(data, iv, &k[..])),
        }
    }
}
