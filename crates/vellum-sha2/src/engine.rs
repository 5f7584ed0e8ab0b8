// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle–Damgård driver: pad, then schedule and compress block by block

use crate::compress::HashState;
use crate::consts::STATE_WORDS;
use crate::padding::Blocks;
use crate::schedule::MessageSchedule;
use crate::word::Word;

/// Runs every padded block of `data` through the compression function,
/// starting from `iv`, and returns the final chaining state.
///
/// The round count is `k.len()`.
pub(crate) fn process<W: Word>(data: &[u8], iv: &[W; STATE_WORDS], k: &[W]) -> HashState<W> {
    let mut state = HashState::new(*iv);

    let blocks = Blocks::new(data, W::BLOCK_LEN);
    debug_assert_eq!(blocks.len(), Blocks::count_for(data.len(), W::BLOCK_LEN));

    for block in blocks {
        let schedule = MessageSchedule::<W>::expand(block.as_ref(), k.len());
        state.compress(schedule.as_slice(), k);
    }

    state
}
