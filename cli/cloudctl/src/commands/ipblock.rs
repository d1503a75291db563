// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IP block commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::{CreateIpBlockRequest, IpBlock, UpdateIpBlockRequest};

use super::Context;
use crate::bulk;
use crate::confirm::Prompter;
use crate::error::CliError;
use crate::filter::ListArgs;
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, join_or_empty, or_empty};
use crate::waiter::WaitArgs;

#[derive(Subcommand, Clone)]
pub enum IpBlockCommand {
    /// List IP blocks
    #[command(alias = "ls")]
    List(ListArgs),
    /// Get an IP block
    Get(IpBlockGetArgs),
    /// Reserve a new IP block
    Create(IpBlockCreateArgs),
    /// Rename an IP block
    Update(IpBlockUpdateArgs),
    /// Release an IP block, or all of them
    #[command(alias = "rm")]
    Delete(IpBlockDeleteArgs),
}

#[derive(Args, Clone)]
pub struct IpBlockGetArgs {
    /// IP block ID
    #[arg(short = 'i', long)]
    pub ipblock_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "1")]
    pub depth: u32,
}

#[derive(Args, Clone)]
pub struct IpBlockCreateArgs {
    /// Name of the IP block
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// Location to reserve the addresses in (e.g. de/fra)
    #[arg(short = 'l', long, default_value = "de/txl")]
    pub location: String,
    /// Number of IP addresses to reserve
    #[arg(long, default_value = "2")]
    pub size: u32,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct IpBlockUpdateArgs {
    /// IP block ID
    #[arg(short = 'i', long)]
    pub ipblock_id: String,
    /// New name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct IpBlockDeleteArgs {
    /// IP block ID
    #[arg(short = 'i', long, required_unless_present = "all", conflicts_with = "all")]
    pub ipblock_id: Option<String>,
    /// Release all IP blocks
    #[arg(short = 'a', long)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

impl Tabular for IpBlock {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &["IpBlockId", "Name", "Location", "Size", "Ips", "State"],
        default: &["IpBlockId", "Name", "Location", "Size", "Ips", "State"],
    };

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "IpBlockId" => self.id.clone(),
            "Name" => or_empty(p.name.as_deref()),
            "Location" => p.location.clone(),
            "Size" => p.size.to_string(),
            "Ips" => join_or_empty(&p.ips),
            "State" => or_empty(self.state()),
            _ => EMPTY.to_string(),
        }
    }
}

impl IpBlockCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_ip_blocks(args, ctx).await,
            Self::Get(args) => get_ip_block(args, ctx).await,
            Self::Create(args) => create_ip_block(args, ctx).await,
            Self::Update(args) => update_ip_block(args, ctx).await,
            Self::Delete(args) => delete_ip_blocks(args, ctx).await,
        }
    }
}

async fn list_ip_blocks(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = args.query::<IpBlock>()?;
    let blocks = ctx.client.list_ip_blocks(args.depth_or(1)).await?;
    ctx.out.list(&query.apply(blocks))
}

async fn get_ip_block(args: IpBlockGetArgs, ctx: &Context) -> Result<()> {
    let block = ctx.client.get_ip_block(&args.ipblock_id, args.depth).await?;
    ctx.out.one(&block)
}

async fn create_ip_block(args: IpBlockCreateArgs, ctx: &Context) -> Result<()> {
    if args.size == 0 {
        anyhow::bail!("--size must be at least 1");
    }

    let request = CreateIpBlockRequest {
        name: args.name,
        location: args.location,
        size: args.size,
    };
    let accepted = ctx.client.create_ip_block(request).await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn update_ip_block(args: IpBlockUpdateArgs, ctx: &Context) -> Result<()> {
    if args.name.is_none() {
        return Err(CliError::NothingToUpdate("--name").into());
    }

    let request = UpdateIpBlockRequest { name: args.name };
    let accepted = ctx
        .client
        .update_ip_block(&args.ipblock_id, &request)
        .await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn delete_ip_blocks(args: IpBlockDeleteArgs, ctx: &Context) -> Result<()> {
    let wait = &args.wait;

    let Some(id) = args.ipblock_id.as_deref() else {
        let deleted = bulk::delete_all(
            "ip block",
            async { Ok::<_, anyhow::Error>(ctx.client.list_ip_blocks(1).await?) },
            |block: &IpBlock| block.id.clone(),
            &mut Prompter,
            ctx.force,
            move |block: IpBlock| async move {
                let accepted = ctx.client.delete_ip_block(&block.id).await?;
                ctx.finish(&accepted, wait).await
            },
        )
        .await?;
        ctx.out.note(format!("Released {} IP block(s)", deleted));
        return Ok(());
    };

    ctx.confirm(&format!("Delete ip block {}?", id))?;
    let accepted = ctx.client.delete_ip_block(id).await?;
    ctx.finish(&accepted, wait).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        let block: IpBlock = serde_json::from_value(serde_json::json!({
            "id": "ipb-1",
            "properties": {
                "location": "de/fra",
                "size": 2,
                "ips": ["192.0.2.10", "192.0.2.11"]
            }
        }))
        .unwrap();

        assert_eq!(block.cell("Name"), "-");
        assert_eq!(block.cell("Size"), "2");
        assert_eq!(block.cell("Ips"), "192.0.2.10,192.0.2.11");
        assert_eq!(block.cell("State"), "-");
    }
}
