// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::{Image, ImageType, UpdateImageRequest};

use super::Context;
use crate::bulk;
use crate::confirm::Prompter;
use crate::error::CliError;
use crate::filter::{self, ListArgs, ListQuery};
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, format_timestamp, join_or_empty, or_empty};
use crate::waiter::WaitArgs;

#[derive(Subcommand, Clone)]
pub enum ImageCommand {
    /// List images
    #[command(alias = "ls")]
    List(ImageListArgs),
    /// Get image details
    Get(ImageGetArgs),
    /// Update image properties
    Update(ImageUpdateArgs),
    /// Delete a private image, or all of them
    #[command(alias = "rm")]
    Delete(ImageDeleteArgs),
}

#[derive(Args, Clone)]
pub struct ImageListArgs {
    /// Filter by location (e.g. de/fra)
    #[arg(short = 'l', long)]
    pub location: Option<String>,
    /// Filter by licence type (e.g. LINUX, WINDOWS)
    #[arg(long)]
    pub licence_type: Option<String>,
    /// Filter by image type (HDD or CDROM)
    #[arg(long = "type")]
    pub image_type: Option<String>,
    /// Filter by image alias (substring)
    #[arg(long)]
    pub image_alias: Option<String>,
    /// Show only the N most recently created images
    #[arg(long)]
    pub latest: Option<usize>,
    #[command(flatten)]
    pub list: ListArgs,
}

impl ImageListArgs {
    fn narrows(&self) -> bool {
        self.location.is_some()
            || self.licence_type.is_some()
            || self.image_type.is_some()
            || self.image_alias.is_some()
            || self.latest.is_some()
            || !self.list.filters.is_empty()
    }
}

#[derive(Args, Clone)]
pub struct ImageGetArgs {
    /// Image ID
    #[arg(short = 'i', long)]
    pub image_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "1")]
    pub depth: u32,
}

#[derive(Args, Clone)]
pub struct ImageUpdateArgs {
    /// Image ID
    #[arg(short = 'i', long)]
    pub image_id: String,
    /// New name
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// New description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    /// Licence type (e.g. LINUX, WINDOWS, UNKNOWN)
    #[arg(long)]
    pub licence_type: Option<String>,
    /// Cloud-init compatibility (NONE or V1)
    #[arg(long)]
    pub cloud_init: Option<String>,
    /// CPU hot-plug capability
    #[arg(long)]
    pub cpu_hot_plug: Option<bool>,
    /// RAM hot-plug capability
    #[arg(long)]
    pub ram_hot_plug: Option<bool>,
    /// NIC hot-plug capability
    #[arg(long)]
    pub nic_hot_plug: Option<bool>,
    /// VirtIO disk hot-plug capability
    #[arg(long)]
    pub disc_virtio_hot_plug: Option<bool>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Clone)]
pub struct ImageDeleteArgs {
    /// Image ID
    #[arg(short = 'i', long, required_unless_present = "all", conflicts_with = "all")]
    pub image_id: Option<String>,
    /// Delete all private images
    #[arg(short = 'a', long)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}

impl Tabular for Image {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &[
            "ImageId",
            "Name",
            "ImageAliases",
            "Location",
            "Size",
            "LicenceType",
            "ImageType",
            "Description",
            "Public",
            "CloudInit",
            "CpuHotPlug",
            "RamHotPlug",
            "NicHotPlug",
            "DiscVirtioHotPlug",
            "State",
            "CreatedDate",
        ],
        default: &[
            "ImageId",
            "Name",
            "ImageAliases",
            "Location",
            "LicenceType",
            "ImageType",
            "CloudInit",
            "CreatedDate",
        ],
    };

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "ImageId" => self.id.clone(),
            "Name" => or_empty(p.name.as_deref()),
            "ImageAliases" => join_or_empty(&p.image_aliases),
            "Location" => or_empty(p.location.as_deref()),
            "Size" => or_empty(p.size.map(|gb| format!("{} GB", gb))),
            "LicenceType" => or_empty(p.licence_type.as_deref()),
            "ImageType" => or_empty(p.image_type),
            "Description" => or_empty(p.description.as_deref()),
            "Public" => or_empty(p.public),
            "CloudInit" => or_empty(p.cloud_init.as_deref()),
            "CpuHotPlug" => or_empty(p.cpu_hot_plug),
            "RamHotPlug" => or_empty(p.ram_hot_plug),
            "NicHotPlug" => or_empty(p.nic_hot_plug),
            "DiscVirtioHotPlug" => or_empty(p.disc_virtio_hot_plug),
            "State" => or_empty(self.state()),
            "CreatedDate" => format_timestamp(self.created()),
            _ => EMPTY.to_string(),
        }
    }
}

impl ImageCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_images(args, ctx).await,
            Self::Get(args) => get_image(args, ctx).await,
            Self::Update(args) => update_image(args, ctx).await,
            Self::Delete(args) => delete_images(args, ctx).await,
        }
    }
}

/// Narrow a fetched image list by `--filters` and the image-specific flags,
/// then sort and truncate
///
/// `--latest` picks from the already filtered images.
fn select_images(
    images: Vec<Image>,
    query: &ListQuery,
    args: &ImageListArgs,
) -> Result<Vec<Image>> {
    let mut images = query.filter(images);

    if let Some(location) = &args.location {
        images = filter::filter_by(images, |i| i.properties.location.as_deref(), location);
    }
    if let Some(licence) = &args.licence_type {
        images = filter::filter_by(
            images,
            |i| i.properties.licence_type.as_deref(),
            &licence.to_uppercase(),
        );
    }
    if let Some(raw) = &args.image_type {
        let wanted: ImageType = raw
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --type '{}': expected HDD or CDROM", raw))?;
        images.retain(|i| i.properties.image_type == Some(wanted));
    }
    if let Some(alias) = &args.image_alias {
        images = filter::alias_contains(images, |i| i.properties.image_aliases.as_slice(), alias);
    }
    if let Some(n) = args.latest {
        images = filter::latest(images, n, |i| i.created());
    }

    Ok(query.arrange(images))
}

async fn list_images(args: ImageListArgs, ctx: &Context) -> Result<()> {
    let query = args.list.query::<Image>()?;
    let images = ctx.client.list_images(args.list.depth_or(1)).await?;
    let images = select_images(images, &query, &args)?;

    if images.is_empty() && args.narrows() {
        return Err(CliError::NoMatches("images").into());
    }
    ctx.out.list(&images)
}

async fn get_image(args: ImageGetArgs, ctx: &Context) -> Result<()> {
    let image = ctx.client.get_image(&args.image_id, args.depth).await?;
    ctx.out.one(&image)
}

async fn update_image(args: ImageUpdateArgs, ctx: &Context) -> Result<()> {
    let request = UpdateImageRequest {
        name: args.name,
        description: args.description,
        licence_type: args.licence_type.map(|l| l.to_uppercase()),
        cloud_init: args.cloud_init.map(|c| c.to_uppercase()),
        cpu_hot_plug: args.cpu_hot_plug,
        ram_hot_plug: args.ram_hot_plug,
        nic_hot_plug: args.nic_hot_plug,
        disc_virtio_hot_plug: args.disc_virtio_hot_plug,
    };

    let nothing_set = request.name.is_none()
        && request.description.is_none()
        && request.licence_type.is_none()
        && request.cloud_init.is_none()
        && request.cpu_hot_plug.is_none()
        && request.ram_hot_plug.is_none()
        && request.nic_hot_plug.is_none()
        && request.disc_virtio_hot_plug.is_none();
    if nothing_set {
        return Err(CliError::NothingToUpdate(
            "--name, --description, --licence-type, --cloud-init, --*-hot-plug",
        )
        .into());
    }

    let accepted = ctx.client.update_image(&args.image_id, &request).await?;
    ctx.out.one(&accepted.value)?;
    ctx.finish(&accepted, &args.wait).await
}

async fn delete_images(args: ImageDeleteArgs, ctx: &Context) -> Result<()> {
    let wait = &args.wait;

    let Some(id) = args.image_id.as_deref() else {
        // Public images belong to the provider and cannot be deleted
        let private = async {
            let images = ctx.client.list_images(1).await?;
            Ok::<_, anyhow::Error>(
                images
                    .into_iter()
                    .filter(|i| i.properties.public != Some(true))
                    .collect::<Vec<_>>(),
            )
        };

        let deleted = bulk::delete_all(
            "image",
            private,
            |image: &Image| match &image.properties.name {
                Some(name) => format!("{} ({})", image.id, name),
                None => image.id.clone(),
            },
            &mut Prompter,
            ctx.force,
            move |image: Image| async move {
                let accepted = ctx.client.delete_image(&image.id).await?;
                ctx.finish(&accepted, wait).await
            },
        )
        .await?;
        ctx.out.note(format!("Deleted {} image(s)", deleted));
        return Ok(());
    };

    ctx.confirm(&format!("Delete image {}?", id))?;
    let accepted = ctx.client.delete_image(id).await?;
    ctx.finish(&accepted, wait).await
}
