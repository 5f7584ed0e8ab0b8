// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable consulted when `--algorithm` is not given
pub const ALGORITHM_ENV: &str = "VELLUM_ALGORITHM";

/// Print or check SHA-2 digests.
///
/// With no FILE and no --text, reads standard input.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "vellum-sum", version, about)]
pub struct Args {
    /// Algorithm name, e.g. sha256, SHA-512/224, sha512-mod
    #[arg(short, long, env = ALGORITHM_ENV, default_value = "sha256")]
    pub algorithm: String,

    /// Hash a literal string instead of a file (repeatable)
    #[arg(short, long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Compare every digest against this reference (hex, either case)
    #[arg(short = 'c', long, value_name = "HEX")]
    pub expect: Option<String>,

    /// Render digests in uppercase hex
    #[arg(short, long)]
    pub uppercase: bool,

    /// List supported algorithms and exit
    #[arg(long)]
    pub list: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to hash; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
