// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Template commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::Template;

use super::Context;
use crate::filter::ListArgs;
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, or_empty};

#[derive(Subcommand, Clone)]
pub enum TemplateCommand {
    /// List templates
    #[command(alias = "ls")]
    List(ListArgs),
    /// Get a template
    Get(TemplateGetArgs),
}

#[derive(Args, Clone)]
pub struct TemplateGetArgs {
    /// Template ID
    #[arg(short = 'i', long)]
    pub template_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "1")]
    pub depth: u32,
}

impl Tabular for Template {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &["TemplateId", "Name", "Cores", "Ram", "StorageSize"],
        default: &["TemplateId", "Name", "Cores", "Ram", "StorageSize"],
    };

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        match column {
            "TemplateId" => self.id.clone(),
            "Name" => or_empty(p.name.as_deref()),
            "Cores" => or_empty(p.cores),
            "Ram" => or_empty(p.ram.map(|mb| format!("{} MB", mb))),
            "StorageSize" => or_empty(p.storage_size.map(|gb| format!("{} GB", gb))),
            _ => EMPTY.to_string(),
        }
    }
}

impl TemplateCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let query = args.query::<Template>()?;
                let templates = ctx.client.list_templates(args.depth_or(1)).await?;
                ctx.out.list(&query.apply(templates))
            }
            Self::Get(args) => {
                let template = ctx
                    .client
                    .get_template(&args.template_id, args.depth)
                    .await?;
                ctx.out.one(&template)
            }
        }
    }
}
