// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SHA-2 engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sha2Error {
    /// Requested variant is not in the catalog
    #[error("unknown SHA-2 variant {name:?}")]
    InvalidVariant {
        /// Name as given by the caller
        name: String,
    },
}
