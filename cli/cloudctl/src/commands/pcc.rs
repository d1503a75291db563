// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Private cross-connect commands
//!
//! A private cross-connect links private LANs of several datacenters.
//! Its peers are the connected LANs.

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::{PccRequest, Peer, PrivateCrossConnect};

use super::Context;
use crate::bulk;
use crate::confirm::Prompter;
use crate::error::CliError;
use crate::filter::ListArgs;
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, or_empty};
use crate::waiter::WaitArgs;

#[derive(Subcommand, Clone)]
pub enum PccCommand {
    /// List private cross-connects
    #[command(alias = "ls")]
    List(ListArgs),
    /// Get a private cross-connect
    Get(PccGetArgs),
    /// Create a private cross-connect
    Create(PccCreateArgs),
    /// Update the name or description of a private cross-connect
    Update(PccUpdateArgs),
    /// Delete a private cross-connect, or all of them
    #[command(alias = "rm")]
    Delete(PccDeleteArgs),
    /// Inspect the LANs connected by a private cross-connect
    Peers {
        #[command(subcommand)]
        command: PccPeersCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum PccPeersCommand {
    /// List connected LANs
    #[command(alias = "ls")]
    List(PccPeersListArgs),
}

#[derive(Args, Clone)]
pub struct PccGetArgs {
    /// Private cross-connect ID
    #[arg(short = 'i', long)]
    pub pcc_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "1")]
    pub depth: u32,
}

#[derive(Args, Clone)]
pub struct PccCreateArgs {
    /// Name of the private cross-connect
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// Description of the private cross-connect
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct PccUpdateArgs {
    /// Private cross-connect ID
    #[arg(short = 'i', long)]
    pub pcc_id: String,
    /// New name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// New description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct PccDeleteArgs {
    /// Private cross-connect ID
    #[arg(short = 'i', long, required_unless_present = "all", conflicts_with = "all")]
    pub pcc_id: Option<String>,
    /// Delete all private cross-connects
    #[arg(short = 'a', long)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct PccPeersListArgs {
    /// Private cross-connect ID
    #[arg(short = 'i', long)]
    pub pcc_id: String,
    #[command(flatten)]
    pub list: ListArgs,
}

impl Tabular for PrivateCrossConnect {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &["PccId", "Name", "Description", "State"],
        default: &["PccId", "Name", "Description", "State"],
    };

    fn cell(&self, column: &str) -> String {
        match column {
            "PccId" => self.id.clone(),
            "Name" => or_empty(self.properties.name.as_deref()),
            "Description" => or_empty(self.properties.description.as_deref()),
            "State" => or_empty(self.state()),
            _ => EMPTY.to_string(),
        }
    }
}

impl Tabular for Peer {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &["LanId", "LanName", "DatacenterId", "DatacenterName", "Location"],
        default: &["LanId", "LanName", "DatacenterId", "DatacenterName", "Location"],
    };

    fn cell(&self, column: &str) -> String {
        let value = match column {
            "LanId" => &self.id,
            "LanName" => &self.name,
            "DatacenterId" => &self.datacenter_id,
            "DatacenterName" => &self.datacenter_name,
            "Location" => &self.location,
            _ => return EMPTY.to_string(),
        };
        or_empty(value.as_deref())
    }
}

impl PccCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_pccs(args, ctx).await,
            Self::Get(args) => get_pcc(args, ctx).await,
            Self::Create(args) => create_pcc(args, ctx).await,
            Self::Update(args) => update_pcc(args, ctx).await,
            Self::Delete(args) => delete_pccs(args, ctx).await,
            Self::Peers { command } => command.run(ctx).await,
        }
    }
}

impl PccPeersCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_peers(args, ctx).await,
        }
    }
}

async fn list_pccs(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = args.query::<PrivateCrossConnect>()?;
    let pccs = ctx.client.list_pccs(args.depth_or(1)).await?;
    ctx.out.list(&query.apply(pccs))
}

async fn get_pcc(args: PccGetArgs, ctx: &Context) -> Result<()> {
    let pcc = ctx.client.get_pcc(&args.pcc_id, args.depth).await?;
    ctx.out.one(&pcc)
}

async fn create_pcc(args: PccCreateArgs, ctx: &Context) -> Result<()> {
    let request = PccRequest {
        name: args.name,
        description: args.description,
    };
    let accepted = ctx.client.create_pcc(request).await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn update_pcc(args: PccUpdateArgs, ctx: &Context) -> Result<()> {
    if args.name.is_none() && args.description.is_none() {
        return Err(CliError::NothingToUpdate("--name, --description").into());
    }

    let request = PccRequest {
        name: args.name,
        description: args.description,
    };
    let accepted = ctx.client.update_pcc(&args.pcc_id, &request).await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn delete_pccs(args: PccDeleteArgs, ctx: &Context) -> Result<()> {
    let wait = &args.wait;

    let Some(id) = args.pcc_id.as_deref() else {
        let deleted = bulk::delete_all(
            "private cross-connect",
            async { Ok::<_, anyhow::Error>(ctx.client.list_pccs(1).await?) },
            |pcc: &PrivateCrossConnect| match &pcc.properties.name {
                Some(name) => format!("{} ({})", pcc.id, name),
                None => pcc.id.clone(),
            },
            &mut Prompter,
            ctx.force,
            move |pcc: PrivateCrossConnect| async move {
                let accepted = ctx.client.delete_pcc(&pcc.id).await?;
                ctx.finish(&accepted, wait).await
            },
        )
        .await?;
        ctx.out
            .note(format!("Deleted {} private cross-connect(s)", deleted));
        return Ok(());
    };

    ctx.confirm(&format!("Delete private cross-connect {}?", id))?;
    let accepted = ctx.client.delete_pcc(id).await?;
    ctx.finish(&accepted, wait).await
}

async fn list_peers(args: PccPeersListArgs, ctx: &Context) -> Result<()> {
    let query = args.list.query::<Peer>()?;
    let pcc = ctx
        .client
        .get_pcc(&args.pcc_id, args.list.depth_or(1))
        .await?;
    ctx.out.list(&query.apply(pcc.properties.peers))
}
