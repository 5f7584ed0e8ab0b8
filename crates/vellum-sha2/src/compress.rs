// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Compression function per FIPS 180-4 Sections 6.2.2 and 6.4.2, steps 2-4

use crate::consts::STATE_WORDS;
use crate::word::{Word, big_sigma_0, big_sigma_1, ch, maj};

/// Chaining state H(i), owned by a single hashing invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HashState<W: Word>([W; STATE_WORDS]);

impl<W: Word> HashState<W> {
    /// State seeded with H(0)
    pub(crate) fn new(iv: [W; STATE_WORDS]) -> Self {
        Self(iv)
    }

    pub(crate) fn words(&self) -> &[W; STATE_WORDS] {
        &self.0
    }

    pub(crate) fn into_words(self) -> [W; STATE_WORDS] {
        self.0
    }

    /// Folds one scheduled block into the state.
    ///
    /// `schedule` and `k` must have the same length (the round count).
    pub(crate) fn compress(&mut self, schedule: &[W], k: &[W]) {
        debug_assert_eq!(schedule.len(), k.len());

        // Step 2: initialize working variables with H(i-1)
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        // Step 3
        for (kt, wt) in k.iter().zip(schedule.iter()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            let t1 = h
                .wrapping_add(big_sigma_1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(*kt)
                .wrapping_add(*wt);
            // T2 = Σ0(a) + Maj(a,b,c)
            let t2 = big_sigma_0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        // Step 4: H(i) = H(i-1) + working variables
        for (hi, v) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *hi = (*hi).wrapping_add(v);
        }
    }
}
