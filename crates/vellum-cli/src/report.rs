// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Output formats: one `sha256sum`-style line per input, or a labelled
//! check block when a reference digest is given.

use std::io::{self, Write};

use vellum_sha2::{Digest, VariantId};

fn hex(digest: &Digest, uppercase: bool) -> String {
    if uppercase {
        format!("{digest:X}")
    } else {
        format!("{digest:x}")
    }
}

/// `<hex>  <label>`
pub fn write_line<W: Write>(
    out: &mut W,
    digest: &Digest,
    label: &str,
    uppercase: bool,
) -> io::Result<()> {
    writeln!(out, "{}  {}", hex(digest, uppercase), label)
}

/// Labelled check block, followed by a blank line:
///
/// ```text
///       Mode: SHA-256
///      Input: 'abc'
///     Result: ba7816bf...
///  Reference: ba7816bf...
///     Status: OK
/// ```
pub fn write_check<W: Write>(
    out: &mut W,
    variant: VariantId,
    label: &str,
    digest: &Digest,
    reference: &str,
    uppercase: bool,
) -> io::Result<bool> {
    let ok = digest.matches_hex(reference);

    writeln!(out, "      Mode: {variant}")?;
    writeln!(out, "     Input: {label}")?;
    writeln!(out, "    Result: {}", hex(digest, uppercase))?;
    writeln!(out, " Reference: {}", reference.trim())?;
    writeln!(out, "    Status: {}", if ok { "OK" } else { "MISMATCH" })?;
    writeln!(out)?;

    Ok(ok)
}

/// Catalog table for `--list`
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} {:>5} {:>6} {:>6} {:>7}",
        "ALGORITHM", "WORD", "BLOCK", "ROUNDS", "DIGEST"
    )?;

    for id in VariantId::ALL {
        let v = id.variant();
        writeln!(
            out,
            "{:<20} {:>5} {:>6} {:>6} {:>7}",
            id.name(),
            v.word_bits(),
            v.block_len(),
            v.round_count(),
            v.digest_len() * 8,
        )?;
    }

    Ok(())
}
