// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resources using addresses of an IP block

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::IpConsumer;

use super::Context;
use crate::filter::ListArgs;
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, or_empty};

#[derive(Subcommand, Clone)]
pub enum IpConsumerCommand {
    /// List the resources using addresses of an IP block
    #[command(alias = "ls")]
    List(IpConsumerListArgs),
}

#[derive(Args, Clone)]
pub struct IpConsumerListArgs {
    /// IP block ID
    #[arg(short = 'i', long)]
    pub ipblock_id: String,
    #[command(flatten)]
    pub list: ListArgs,
}

impl Tabular for IpConsumer {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &[
            "Ip",
            "Mac",
            "NicId",
            "ServerId",
            "ServerName",
            "DatacenterId",
            "DatacenterName",
            "K8sNodePoolUuid",
            "K8sClusterUuid",
        ],
        default: &[
            "Ip",
            "NicId",
            "ServerId",
            "DatacenterId",
            "K8sNodePoolUuid",
            "K8sClusterUuid",
        ],
    };

    fn cell(&self, column: &str) -> String {
        let value = match column {
            "Ip" => &self.ip,
            "Mac" => &self.mac,
            "NicId" => &self.nic_id,
            "ServerId" => &self.server_id,
            "ServerName" => &self.server_name,
            "DatacenterId" => &self.datacenter_id,
            "DatacenterName" => &self.datacenter_name,
            "K8sNodePoolUuid" => &self.k8s_node_pool_uuid,
            "K8sClusterUuid" => &self.k8s_cluster_uuid,
            _ => return EMPTY.to_string(),
        };
        or_empty(value.as_deref())
    }
}

impl IpConsumerCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_ip_consumers(args, ctx).await,
        }
    }
}

async fn list_ip_consumers(args: IpConsumerListArgs, ctx: &Context) -> Result<()> {
    let query = args.list.query::<IpConsumer>()?;
    let block = ctx
        .client
        .get_ip_block(&args.ipblock_id, args.list.depth_or(1))
        .await?;
    ctx.out.list(&query.apply(block.properties.ip_consumers))
}
