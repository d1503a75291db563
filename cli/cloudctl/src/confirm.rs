// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Interactive confirmation of destructive operations

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Result;
use dialoguer::Confirm as DialoguerConfirm;

use crate::error::CliError;

/// Something that can answer a yes/no question
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Asks the user on the terminal
///
/// With a TTY on stdin the prompt is interactive. Otherwise one line is
/// read from stdin, so answers can be piped in; end of input counts as no.
#[derive(Debug, Default)]
pub struct Prompter;

impl Confirm for Prompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if std::io::stdin().is_terminal() {
            return Ok(DialoguerConfirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?);
        }

        let mut stderr = std::io::stderr();
        write!(stderr, "{} [y/N]: ", prompt)?;
        stderr.flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(parse_answer(&line))
    }
}

/// Only an explicit yes counts
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask unless `force` is set; a "no" becomes [`CliError::UserDenied`]
pub fn require(confirm: &mut dyn Confirm, force: bool, prompt: &str) -> Result<()> {
    if force || confirm.confirm(prompt)? {
        Ok(())
    } else {
        Err(CliError::UserDenied.into())
    }
}
