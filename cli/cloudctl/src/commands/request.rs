// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request commands
//!
//! Requests are the asynchronous jobs the API creates for every mutation.

use anyhow::Result;
use clap::{Args, Subcommand};
use cloud_client::Request;

use super::Context;
use crate::filter::{self, ListArgs, ListQuery};
use crate::output::Tabular;
use crate::output::columns::{ColumnSet, EMPTY, format_timestamp, join_or_empty, or_empty};
use crate::waiter;

/// Depth needed for the request status to be included
const REQUEST_DEPTH: u32 = 2;

#[derive(Subcommand, Clone)]
pub enum RequestCommand {
    /// List requests
    #[command(alias = "ls")]
    List(RequestListArgs),
    /// Get a request
    Get(RequestGetArgs),
    /// Wait for a request to finish
    Wait(RequestWaitArgs),
}

#[derive(Args, Clone)]
pub struct RequestListArgs {
    /// Filter by HTTP method (e.g. POST, DELETE)
    #[arg(long)]
    pub method: Option<String>,
    /// Show only the N most recent requests
    #[arg(long)]
    pub latest: Option<usize>,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Clone)]
pub struct RequestGetArgs {
    /// Request ID
    #[arg(short = 'i', long)]
    pub request_id: String,
    /// Level of detail for response objects
    #[arg(short = 'D', long, default_value = "2")]
    pub depth: u32,
}

#[derive(Args, Clone)]
pub struct RequestWaitArgs {
    /// Request ID
    #[arg(short = 'i', long)]
    pub request_id: String,
    /// Timeout in seconds
    #[arg(short = 't', long, default_value = "60")]
    pub timeout: u64,
}

impl Tabular for Request {
    const COLUMNS: ColumnSet = ColumnSet {
        all: &[
            "RequestId",
            "CreatedDate",
            "CreatedBy",
            "Method",
            "Status",
            "Message",
            "Url",
            "Body",
            "Targets",
        ],
        default: &[
            "RequestId",
            "CreatedDate",
            "Method",
            "Status",
            "Message",
            "Targets",
        ],
    };

    fn cell(&self, column: &str) -> String {
        let p = &self.properties;
        let status = self.status();
        match column {
            "RequestId" => self.id.clone(),
            "CreatedDate" => format_timestamp(self.created()),
            "CreatedBy" => or_empty(self.metadata.as_ref().and_then(|m| m.created_by.as_deref())),
            "Method" => or_empty(p.method.as_deref()),
            "Status" => or_empty(status.and_then(|s| s.state())),
            "Message" => or_empty(status.and_then(|s| s.message())),
            "Url" => or_empty(p.url.as_deref()),
            "Body" => or_empty(p.body.as_deref()),
            "Targets" => {
                let targets: Vec<String> = status
                    .map(|s| s.targets())
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|t| t.target.as_ref())
                    .map(|r| match &r.kind {
                        Some(kind) => format!("{} ({})", r.id, kind),
                        None => r.id.clone(),
                    })
                    .collect();
                join_or_empty(&targets)
            }
            _ => EMPTY.to_string(),
        }
    }
}

impl RequestCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_requests(args, ctx).await,
            Self::Get(args) => {
                let request = ctx.client.get_request(&args.request_id, args.depth).await?;
                ctx.out.one(&request)
            }
            Self::Wait(args) => wait_request(args, ctx).await,
        }
    }
}

/// Narrow a fetched request list by `--filters`, `--method` and `--latest`,
/// then sort and truncate
fn select_requests(
    requests: Vec<Request>,
    query: &ListQuery,
    args: &RequestListArgs,
) -> Vec<Request> {
    let mut requests = query.filter(requests);
    if let Some(method) = &args.method {
        requests.retain(|r| {
            r.properties
                .method
                .as_deref()
                .is_some_and(|m| m.eq_ignore_ascii_case(method))
        });
    }
    if let Some(n) = args.latest {
        requests = filter::latest(requests, n, |r| r.created());
    }
    query.arrange(requests)
}

async fn list_requests(args: RequestListArgs, ctx: &Context) -> Result<()> {
    let query = args.list.query::<Request>()?;
    let requests = ctx
        .client
        .list_requests(args.list.depth_or(REQUEST_DEPTH))
        .await?;
    ctx.out.list(&select_requests(requests, &query, &args))
}

async fn wait_request(args: RequestWaitArgs, ctx: &Context) -> Result<()> {
    let request = ctx.client.request_status_ref(&args.request_id)?;
    let timeout = std::time::Duration::from_secs(args.timeout);
    let status = waiter::wait_for_request(&ctx.client, &request, timeout, &ctx.out).await?;

    if ctx.out.is_json() {
        return crate::output::json::print_json(&status);
    }
    ctx.out.note(format!("Request {} DONE", args.request_id));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(id: &str, method: &str, created: &str) -> Request {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "metadata": {
                "createdDate": created,
                "createdBy": "ops@example.com",
                "requestStatus": {
                    "metadata": {
                        "status": "DONE",
                        "message": "Request has been successfully executed",
                        "targets": [
                            {"target": {"id": "ipb-1", "type": "ipblock"}, "status": "DONE"}
                        ]
                    }
                }
            },
            "properties": {"method": method, "url": "https://api.example.com/ipblocks"}
        }))
        .unwrap()
    }

    #[test]
    fn test_cells() {
        let r = request("req-1", "POST", "2024-05-01T10:00:00Z");
        assert_eq!(r.cell("Status"), "DONE");
        assert_eq!(r.cell("Targets"), "ipb-1 (ipblock)");
        assert_eq!(r.cell("CreatedDate"), "2024-05-01T10:00:00Z");
        assert_eq!(r.cell("Body"), "-");
    }

    #[test]
    fn test_method_and_latest() {
        let requests = vec![
            request("r1", "POST", "2024-05-01T10:00:00Z"),
            request("r2", "DELETE", "2024-05-02T10:00:00Z"),
            request("r3", "post", "2024-05-03T10:00:00Z"),
            request("r4", "POST", "2024-05-04T10:00:00Z"),
        ];
        let args = RequestListArgs {
            method: Some("POST".to_string()),
            latest: Some(2),
            list: ListArgs::default(),
        };
        let got: Vec<String> = select_requests(requests, &ListQuery::default(), &args)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(got, vec!["r4", "r3"]);
    }

    #[test]
    fn test_latest_picks_from_filtered_requests() {
        let requests = vec![
            request("r1", "POST", "2024-05-01T10:00:00Z"),
            request("r2", "DELETE", "2024-05-02T10:00:00Z"),
            request("r3", "DELETE", "2024-05-03T10:00:00Z"),
            request("r4", "POST", "2024-05-04T10:00:00Z"),
        ];
        let list = ListArgs {
            filters: vec!["Method=delete".to_string()],
            ..ListArgs::default()
        };
        let query = list.query::<Request>().unwrap();
        let args = RequestListArgs {
            method: None,
            latest: Some(1),
            list,
        };
        let got: Vec<String> = select_requests(requests, &query, &args)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(got, vec!["r3"]);
    }
}
