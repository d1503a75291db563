// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Storing and removing credentials

use anyhow::{Context as _, Result};
use clap::Args;
use cloud_client::TypedClient;
use dialoguer::Input;

use crate::config::{self, Config, Overrides};
use crate::output::Output;

#[derive(Args, Clone)]
pub struct LoginArgs {
    /// Store the credentials without checking them against the API
    #[arg(long)]
    pub skip_verify: bool,
}

/// Check credentials against the API and store them in the config file
///
/// Missing values are asked for: the username on the terminal, the password
/// without echo. A token, when given, is stored instead of username and
/// password.
pub async fn login(args: LoginArgs, overrides: &Overrides, out: &Output) -> Result<()> {
    let existing = Config::load()?;

    let mut stored = Config {
        api_url: overrides.api_url.clone().or(existing.api_url),
        contract: overrides.contract.clone().or(existing.contract),
        ..Default::default()
    };

    if let Some(token) = &overrides.token {
        stored.token = Some(token.clone());
    } else {
        let username = match &overrides.username {
            Some(u) => u.clone(),
            None => Input::new().with_prompt("Username").interact_text()?,
        };
        let password = match &overrides.password {
            Some(p) => p.clone(),
            None => rpassword::prompt_password("Password: ")
                .context("Failed to read password")?,
        };
        stored.username = Some(username);
        stored.password = Some(password);
    }

    if !args.skip_verify {
        let connection = config::resolve(&Overrides::default(), &stored)?;
        let client = TypedClient::new(&connection.api_url, connection.auth)?;
        let info = client
            .get_api_info()
            .await
            .context("Failed to authenticate")?;
        tracing::debug!(api = %info.name, version = %info.version, "credentials accepted");
    }

    stored.save()?;
    out.note(format!(
        "Credentials saved to {}",
        config::config_file().display()
    ));
    Ok(())
}

/// Remove stored credentials
pub fn logout(out: &Output) -> Result<()> {
    if Config::remove()? {
        out.note("Credentials removed");
    } else {
        out.note("No stored credentials");
    }
    Ok(())
}
