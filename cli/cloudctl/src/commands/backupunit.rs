// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Backup unit commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::{BackupUnit, BackupUnitProperties, UpdateBackupUnitRequest};

use super::Context;
use crate::bulk;
use crate::confirm::Prompter;
use crate::error::CliError;
use crate::filter::ListArgs;
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, or_empty};
use crate::waiter::WaitArgs;

#[derive(Subcommand, Clone)]
pub enum BackupUnitCommand {
    /// List backup units
    #[command(alias = "ls")]
    List(ListArgs),
    /// Get a backup unit
    Get(BackupUnitGetArgs),
    /// Create a backup unit
    Create(BackupUnitCreateArgs),
    /// Update the password or email of a backup unit
    Update(BackupUnitUpdateArgs),
    /// Delete a backup unit, or all of them
    #[command(alias = "rm")]
    Delete(BackupUnitDeleteArgs),
    /// Get the single sign-on URL of the backup portal
    GetSsoUrl(BackupUnitSsoArgs),
}

#[derive(Args, Clone)]
pub struct BackupUnitGetArgs {
    /// Backup unit ID
    #[arg(short = 'i', long)]
    pub backupunit_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "1")]
    pub depth: u32,
}

#[derive(Args, Clone)]
pub struct BackupUnitCreateArgs {
    /// Alphanumeric name; becomes part of the backup login
    #[arg(short = 'n', long)]
    pub name: String,
    /// Contact email for the backup unit
    #[arg(short = 'e', long)]
    pub email: String,
    /// Password for the backup unit
    #[arg(short = 'p', long = "unit-password")]
    pub unit_password: String,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct BackupUnitUpdateArgs {
    /// Backup unit ID
    #[arg(short = 'i', long)]
    pub backupunit_id: String,
    /// New contact email
    #[arg(short = 'e', long)]
    pub email: Option<String>,
    /// New password
    #[arg(short = 'p', long = "unit-password")]
    pub unit_password: Option<String>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct BackupUnitDeleteArgs {
    /// Backup unit ID
    #[arg(short = 'i', long, required_unless_present = "all", conflicts_with = "all")]
    pub backupunit_id: Option<String>,
    /// Delete all backup units
    #[arg(short = 'a', long)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct BackupUnitSsoArgs {
    /// Backup unit ID
    #[arg(short = 'i', long)]
    pub backupunit_id: String,
}

impl Tabular for BackupUnit {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &["BackupUnitId", "Name", "Email", "State"],
        default: &["BackupUnitId", "Name", "Email", "State"],
    };

    fn cell(&self, column: &str) -> String {
        match column {
            "BackupUnitId" => self.id.clone(),
            "Name" => self.properties.name.clone(),
            "Email" => or_empty(self.properties.email.as_deref()),
            "State" => or_empty(self.state()),
            _ => EMPTY.to_string(),
        }
    }
}

impl BackupUnitCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_backup_units(args, ctx).await,
            Self::Get(args) => get_backup_unit(args, ctx).await,
            Self::Create(args) => create_backup_unit(args, ctx).await,
            Self::Update(args) => update_backup_unit(args, ctx).await,
            Self::Delete(args) => delete_backup_units(args, ctx).await,
            Self::GetSsoUrl(args) => get_sso_url(args, ctx).await,
        }
    }
}

async fn list_backup_units(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = args.query::<BackupUnit>()?;
    let units = ctx.client.list_backup_units(args.depth_or(1)).await?;
    ctx.out.list(&query.apply(units))
}

async fn get_backup_unit(args: BackupUnitGetArgs, ctx: &Context) -> Result<()> {
    let unit = ctx
        .client
        .get_backup_unit(&args.backupunit_id, args.depth)
        .await?;
    ctx.out.one(&unit)
}

async fn create_backup_unit(args: BackupUnitCreateArgs, ctx: &Context) -> Result<()> {
    let properties = BackupUnitProperties {
        name: args.name,
        email: Some(args.email),
        password: Some(args.unit_password),
    };
    let accepted = ctx.client.create_backup_unit(properties).await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn update_backup_unit(args: BackupUnitUpdateArgs, ctx: &Context) -> Result<()> {
    if args.email.is_none() && args.unit_password.is_none() {
        return Err(CliError::NothingToUpdate("--email, --unit-password").into());
    }

    let request = UpdateBackupUnitRequest {
        email: args.email,
        password: args.unit_password,
    };
    let accepted = ctx
        .client
        .update_backup_unit(&args.backupunit_id, &request)
        .await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn delete_backup_units(args: BackupUnitDeleteArgs, ctx: &Context) -> Result<()> {
    let wait = &args.wait;

    let Some(id) = args.backupunit_id.as_deref() else {
        let deleted = bulk::delete_all(
            "backup unit",
            async { Ok::<_, anyhow::Error>(ctx.client.list_backup_units(1).await?) },
            |unit: &BackupUnit| format!("{} ({})", unit.id, unit.properties.name),
            &mut Prompter,
            ctx.force,
            move |unit: BackupUnit| async move {
                let accepted = ctx.client.delete_backup_unit(&unit.id).await?;
                ctx.finish(&accepted, wait).await
            },
        )
        .await?;
        ctx.out.note(format!("Deleted {} backup unit(s)", deleted));
        return Ok(());
    };

    ctx.confirm(&format!("Delete backup unit {}?", id))?;
    let accepted = ctx.client.delete_backup_unit(id).await?;
    ctx.finish(&accepted, wait).await
}

async fn get_sso_url(args: BackupUnitSsoArgs, ctx: &Context) -> Result<()> {
    let sso = ctx
        .client
        .get_backup_unit_sso_url(&args.backupunit_id)
        .await?;

    if ctx.out.is_json() {
        return crate::output::json::print_json(&sso);
    }
    match sso.sso_url {
        Some(url) => println!("{}", url),
        None => anyhow::bail!("the API returned no SSO URL"),
    }
    Ok(())
}
