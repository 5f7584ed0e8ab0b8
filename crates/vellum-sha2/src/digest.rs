// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest formatter and the [`Digest`] value type

use core::fmt;

use vellum_util::{constant_time_eq, try_hex_to_bytes, write_hex};

use crate::compress::HashState;
use crate::consts::MAX_DIGEST_LEN;
use crate::variant::{Variant, VariantId};
use crate::word::Word;

/// A finished digest: the emitted state words in big-endian byte order.
#[derive(Clone, Copy)]
pub struct Digest {
    value: [u8; MAX_DIGEST_LEN],
    len: usize,
    variant: VariantId,
}

impl Digest {
    /// Emits `variant.emitted_words()` words of `state` big-endian; with
    /// half truncation the last word contributes its upper half only.
    pub(crate) fn from_state<W: Word>(variant: &Variant, state: &HashState<W>) -> Self {
        let mut value = [0u8; MAX_DIGEST_LEN];
        let emitted = variant.emitted_words();

        for (word, out) in state
            .words()
            .iter()
            .take(emitted)
            .zip(value.chunks_exact_mut(W::BYTES))
        {
            word.store_be(out);
        }

        let len = if variant.half_truncates_last() {
            emitted * W::BYTES - W::BYTES / 2
        } else {
            emitted * W::BYTES
        };

        // Drop the truncated half so it never shows up through `value`
        for byte in value[len..].iter_mut() {
            *byte = 0;
        }

        debug_assert_eq!(len, variant.digest_len());

        Self {
            value,
            len,
            variant: variant.id(),
        }
    }

    /// Variant that produced this digest
    pub fn variant(&self) -> VariantId {
        self.variant
    }

    /// Digest length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// No variant emits an empty digest; provided alongside `len`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex rendering without separators
    pub fn to_hex(&self) -> String {
        vellum_util::bytes_to_hex(self.as_ref(), false)
    }

    /// Compares against a reference digest given as hex (either case).
    ///
    /// Malformed hex never matches.
    pub fn matches_hex(&self, reference: &str) -> bool {
        match try_hex_to_bytes(reference.trim()) {
            Ok(expected) => constant_time_eq(self.as_ref(), &expected),
            Err(_) => false,
        }
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.len]
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && constant_time_eq(self.as_ref(), other.as_ref())
    }
}

impl Eq for Digest {}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.variant)?;
        write_hex(f, self.as_ref(), false)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_ref(), false)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_ref(), false)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_ref(), true)
    }
}
