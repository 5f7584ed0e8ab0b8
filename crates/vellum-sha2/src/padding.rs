// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Sections 5.1.1 and 5.1.2
//!
//! [`Blocks`] walks the input in block-sized views and then yields one or two
//! synthesized blocks carrying the remainder, the 0x80 terminator, zero fill
//! and the big-endian bit length.

use core::slice::ChunksExact;

use vellum_util::u64_to_be;

use crate::consts::MAX_BLOCK_LEN;

/// One block of the padded message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// Full block borrowed straight from the input
    Message(&'a [u8]),
    /// Block synthesized by the padder
    Padding {
        bytes: [u8; MAX_BLOCK_LEN],
        len: usize,
    },
}

impl AsRef<[u8]> for Block<'_> {
    fn as_ref(&self) -> &[u8] {
        match self {
            Block::Message(bytes) => bytes,
            Block::Padding { bytes, len } => &bytes[..*len],
        }
    }
}

/// Lazy, restartable sequence of padded blocks over a borrowed message.
#[derive(Clone, Debug)]
pub(crate) struct Blocks<'a> {
    full: ChunksExact<'a, u8>,
    tail: [u8; 2 * MAX_BLOCK_LEN],
    tail_len: usize,
    tail_pos: usize,
    block_len: usize,
}

impl<'a> Blocks<'a> {
    /// Pads `data` into blocks of `block_len` bytes (64 or 128).
    ///
    /// The length field is 8 bytes for 64-byte blocks and 16 bytes for
    /// 128-byte blocks, whose upper half is always zero.
    pub(crate) fn new(data: &'a [u8], block_len: usize) -> Self {
        debug_assert!(block_len == 64 || block_len == MAX_BLOCK_LEN);

        let full = data.chunks_exact(block_len);
        let remainder = full.remainder();
        let length_field = block_len / 8;

        let mut tail = [0u8; 2 * MAX_BLOCK_LEN];
        tail[..remainder.len()].copy_from_slice(remainder);
        tail[remainder.len()] = 0x80;

        // Terminator and length must fit after the remainder, else spill
        let tail_len = if remainder.len() + 1 + length_field <= block_len {
            block_len
        } else {
            2 * block_len
        };

        let bit_len = (data.len() as u64).wrapping_mul(8);
        let mut len_bytes = [0u8; 8];
        u64_to_be(bit_len, &mut len_bytes);
        tail[tail_len - 8..tail_len].copy_from_slice(&len_bytes);

        Self {
            full,
            tail,
            tail_len,
            tail_pos: 0,
            block_len,
        }
    }

    /// Number of blocks the padder emits for a `len`-byte message.
    pub(crate) fn count_for(len: usize, block_len: usize) -> usize {
        let length_field = block_len / 8;
        let tail_blocks = if len % block_len + 1 + length_field <= block_len {
            1
        } else {
            2
        };
        len / block_len + tail_blocks
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        if let Some(chunk) = self.full.next() {
            return Some(Block::Message(chunk));
        }

        if self.tail_pos >= self.tail_len {
            return None;
        }

        let mut bytes = [0u8; MAX_BLOCK_LEN];
        bytes[..self.block_len]
            .copy_from_slice(&self.tail[self.tail_pos..self.tail_pos + self.block_len]);
        self.tail_pos += self.block_len;

        Some(Block::Padding {
            bytes,
            len: self.block_len,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.full.len() + (self.tail_len - self.tail_pos) / self.block_len;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl core::iter::FusedIterator for Blocks<'_> {}
