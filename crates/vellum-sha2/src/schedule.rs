// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Sections 6.2.2 and 6.4.2, step 1

use crate::consts::MAX_ROUNDS;
use crate::word::{Word, small_sigma_0, small_sigma_1};

/// Expanded schedule W[0..rounds] for a single block.
///
/// Lives on the stack of one compression call and is rebuilt per block.
pub(crate) struct MessageSchedule<W: Word> {
    w: [W; MAX_ROUNDS],
    rounds: usize,
}

impl<W: Word> MessageSchedule<W> {
    /// Builds the schedule for `block` (exactly `W::BLOCK_LEN` bytes).
    ///
    /// W[0..15] are the block words read big-endian;
    /// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16] for t in 16..rounds.
    pub(crate) fn expand(block: &[u8], rounds: usize) -> Self {
        debug_assert_eq!(block.len(), W::BLOCK_LEN);
        debug_assert!((16..=MAX_ROUNDS).contains(&rounds));

        let mut w = [W::default(); MAX_ROUNDS];

        for (t, wt) in w.iter_mut().take(16).enumerate() {
            *wt = W::load_be(block, t);
        }

        for t in 16..rounds {
            w[t] = small_sigma_1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma_0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        Self { w, rounds }
    }

    /// The `rounds` scheduled words
    pub(crate) fn as_slice(&self) -> &[W] {
        &self.w[..self.rounds]
    }
}
