// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shell completion scripts

use clap::{Args, CommandFactory};
use clap_complete::Shell;

#[derive(Args, Clone)]
pub struct CompletionArgs {
    /// Shell to generate the script for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Print the completion script for `shell` on stdout
pub fn run(args: CompletionArgs) {
    let mut cmd = crate::Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "cloudctl", &mut std::io::stdout());
}
