// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod backupunit;
pub mod cdrom;
pub mod completion;
pub mod image;
pub mod ipblock;
pub mod ipconsumer;
pub mod login;
pub mod pcc;
pub mod request;
pub mod template;

pub use backupunit::BackupUnitCommand;
pub use cdrom::CdromCommand;
pub use image::ImageCommand;
pub use ipblock::IpBlockCommand;
pub use ipconsumer::IpConsumerCommand;
pub use pcc::PccCommand;
pub use request::RequestCommand;
pub use template::TemplateCommand;

use anyhow::Result;
use cloud_client::{Accepted, TypedClient};

use crate::confirm::{self, Prompter};
use crate::output::Output;
use crate::waiter::{self, WaitArgs};

/// What every API command runs with
pub struct Context {
    pub client: TypedClient,
    pub out: Output,
    /// Skip confirmation prompts
    pub force: bool,
}

impl Context {
    /// Ask before a destructive operation unless `--force` was given
    pub fn confirm(&self, prompt: &str) -> Result<()> {
        confirm::require(&mut Prompter, self.force, prompt)
    }

    /// Report an accepted mutation and wait for it if asked to
    pub async fn finish<T>(&self, accepted: &Accepted<T>, wait: &WaitArgs) -> Result<()> {
        waiter::maybe_wait(&self.client, accepted.request.as_ref(), wait, &self.out).await
    }
}
