// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use thiserror::Error;
use vellum_sha2::Sha2Error;
use vellum_util::HexError;

/// Driver failure
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading an input or writing the report failed
    #[error("{path}: {source}")]
    Io {
        /// Input path, `-` for stdin or `<stdout>`
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Unknown algorithm name
    #[error(transparent)]
    Sha2(#[from] Sha2Error),

    /// `--expect` is not a hex digest
    #[error("invalid reference digest: {0}")]
    InvalidReference(#[from] HexError),

    /// At least one digest differed from the reference
    #[error("{mismatched} of {total} digest(s) did not match the reference")]
    Mismatch {
        /// Inputs whose digest differed
        mismatched: usize,
        /// Inputs checked
        total: usize,
    },
}

impl CliError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
