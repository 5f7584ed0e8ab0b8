// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::error::CliError;

/// Label used for standard input
pub const STDIN_LABEL: &str = "-";

/// One thing to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// File on disk
    File(PathBuf),
    /// Literal text from `--text`
    Text(String),
}

impl Input {
    /// Inputs named by `args`: texts first, then files. Standard input when
    /// neither is given.
    pub fn from_args(args: &Args) -> Vec<Input> {
        let mut inputs: Vec<Input> = args.texts.iter().cloned().map(Input::Text).collect();

        inputs.extend(args.files.iter().map(|path| {
            if path == Path::new(STDIN_LABEL) {
                Input::Stdin
            } else {
                Input::File(path.clone())
            }
        }));

        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }

        inputs
    }

    /// How the input is shown in reports
    pub fn label(&self) -> String {
        match self {
            Input::Stdin => STDIN_LABEL.to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Text(text) => format!("'{text}'"),
        }
    }

    /// Reads the whole input into memory.
    ///
    /// Standard input is taken from `stdin` so callers can substitute it.
    pub fn read<R: Read>(&self, stdin: &mut R) -> Result<Vec<u8>, CliError> {
        match self {
            Input::Stdin => {
                let mut data = Vec::new();
                stdin
                    .read_to_end(&mut data)
                    .map_err(|e| CliError::io(STDIN_LABEL, e))?;
                Ok(data)
            }
            Input::File(path) => {
                fs::read(path).map_err(|e| CliError::io(path.display().to_string(), e))
            }
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}
