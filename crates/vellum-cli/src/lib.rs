// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `vellum-sum` driver.
//!
//! [`run`] takes its standard streams as parameters; the binary only parses
//! arguments, installs the log subscriber and maps the result to an exit code.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod args;
mod error;
mod input;
mod report;

use std::io::{Read, Write};

use vellum_sha2::VariantId;
use vellum_util::try_hex_to_bytes;

pub use args::{ALGORITHM_ENV, Args};
pub use error::CliError;
pub use input::{Input, STDIN_LABEL};
pub use report::{write_catalog, write_check, write_line};

const STDOUT_LABEL: &str = "<stdout>";

/// Executes one invocation.
///
/// # Errors
/// - [`CliError::Sha2`] for an unknown `--algorithm`
/// - [`CliError::InvalidReference`] if `--expect` is not hex
/// - [`CliError::Io`] if an input cannot be read or output cannot be written
/// - [`CliError::Mismatch`] if any digest differs from `--expect`
pub fn run<R, W>(args: &Args, stdin: &mut R, stdout: &mut W) -> Result<(), CliError>
where
    R: Read,
    W: Write,
{
    if args.list {
        return write_catalog(stdout).map_err(|e| CliError::io(STDOUT_LABEL, e));
    }

    let variant: VariantId = args.algorithm.parse()?;

    // Reject malformed references before reading any input
    if let Some(reference) = &args.expect {
        try_hex_to_bytes(reference.trim())?;
    }

    let inputs = Input::from_args(args);
    tracing::debug!(algorithm = %variant, inputs = inputs.len(), "hashing");

    let mut mismatched = 0;

    for input in &inputs {
        let data = input.read(stdin)?;
        let digest = vellum_sha2::hash(&data, variant);
        let label = input.label();

        tracing::debug!(input = %label, bytes = data.len(), "digest computed");

        match &args.expect {
            Some(reference) => {
                let ok = write_check(stdout, variant, &label, &digest, reference, args.uppercase)
                    .map_err(|e| CliError::io(STDOUT_LABEL, e))?;
                if !ok {
                    tracing::warn!(input = %label, "digest does not match reference");
                    mismatched += 1;
                }
            }
            None => write_line(stdout, &digest, &label, args.uppercase)
                .map_err(|e| CliError::io(STDOUT_LABEL, e))?,
        }
    }

    stdout.flush().map_err(|e| CliError::io(STDOUT_LABEL, e))?;

    if mismatched > 0 {
        return Err(CliError::Mismatch {
            mismatched,
            total: inputs.len(),
        });
    }

    Ok(())
}
