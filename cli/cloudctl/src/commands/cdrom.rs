// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CD-ROMs attached to a server
//!
//! CD-ROMs are images of type CDROM; they render with the image columns.

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::Cdrom;

use super::Context;
use crate::bulk;
use crate::confirm::Prompter;
use crate::filter::ListArgs;
use crate::waiter::WaitArgs;

#[derive(Subcommand, Clone)]
pub enum CdromCommand {
    /// List CD-ROMs attached to a server
    #[command(alias = "ls")]
    List(CdromListArgs),
    /// Get an attached CD-ROM
    Get(CdromGetArgs),
    /// Attach a CD-ROM image to a server
    Attach(CdromAttachArgs),
    /// Detach a CD-ROM from a server, or all of them
    Detach(CdromDetachArgs),
}

/// Identifies the server the CD-ROMs belong to
#[derive(Args, Clone)]
pub struct ServerArgs {
    /// Datacenter ID
    #[arg(long)]
    pub datacenter_id: String,
    /// Server ID
    #[arg(long)]
    pub server_id: String,
}

#[derive(Args, Clone)]
pub struct CdromListArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Clone)]
pub struct CdromGetArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    /// CD-ROM ID
    #[arg(short = 'i', long)]
    pub cdrom_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "1")]
    pub depth: u32,
}

#[derive(Args, Clone)]
pub struct CdromAttachArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    /// ID of the CDROM image to attach
    #[arg(short = 'i', long)]
    pub cdrom_id: String,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct CdromDetachArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    /// CD-ROM ID
    #[arg(short = 'i', long, required_unless_present = "all", conflicts_with = "all")]
    pub cdrom_id: Option<String>,
    /// Detach all CD-ROMs from the server
    #[arg(short = 'a', long)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

impl CdromCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_cdroms(args, ctx).await,
            Self::Get(args) => get_cdrom(args, ctx).await,
            Self::Attach(args) => attach_cdrom(args, ctx).await,
            Self::Detach(args) => detach_cdroms(args, ctx).await,
        }
    }
}

async fn list_cdroms(args: CdromListArgs, ctx: &Context) -> Result<()> {
    let query = args.list.query::<Cdrom>()?;
    let cdroms = ctx
        .client
        .list_cdroms(
            &args.server.datacenter_id,
            &args.server.server_id,
            args.list.depth_or(1),
        )
        .await?;
    ctx.out.list(&query.apply(cdroms))
}

async fn get_cdrom(args: CdromGetArgs, ctx: &Context) -> Result<()> {
    let cdrom = ctx
        .client
        .get_cdrom(
            &args.server.datacenter_id,
            &args.server.server_id,
            &args.cdrom_id,
            args.depth,
        )
        .await?;
    ctx.out.one(&cdrom)
}

async fn attach_cdrom(args: CdromAttachArgs, ctx: &Context) -> Result<()> {
    let accepted = ctx
        .client
        .attach_cdrom(
            &args.server.datacenter_id,
            &args.server.server_id,
            &args.cdrom_id,
        )
        .await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn detach_cdroms(args: CdromDetachArgs, ctx: &Context) -> Result<()> {
    let dc = args.server.datacenter_id.as_str();
    let server = args.server.server_id.as_str();
    let wait = &args.wait;

    let Some(id) = args.cdrom_id.as_deref() else {
        let detached = bulk::delete_all(
            "cdrom",
            async { Ok::<_, anyhow::Error>(ctx.client.list_cdroms(dc, server, 1).await?) },
            |cdrom: &Cdrom| match &cdrom.properties.name {
                Some(name) => format!("{} ({})", cdrom.id, name),
                None => cdrom.id.clone(),
            },
            &mut Prompter,
            ctx.force,
            move |cdrom: Cdrom| async move {
                let accepted = ctx.client.detach_cdrom(dc, server, &cdrom.id).await?;
                ctx.finish(&accepted, wait).await
            },
        )
        .await?;
        ctx.out
            .note(format!("Detached {} CD-ROM(s) from server {}", detached, server));
        return Ok(());
    };

    ctx.confirm(&format!("Detach cdrom {} from server {}?", id, server))?;
    let accepted = ctx.client.detach_cdrom(dc, server, id).await?;
    ctx.finish(&accepted, wait).await
}
