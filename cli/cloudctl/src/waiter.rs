// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Waiting for asynchronous requests
//!
//! Every mutation is executed by the API as a request job. Waiting means
//! polling the job's status at a fixed interval until it is done, it
//! failed, or the deadline passes.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Args;
use cloud_client::{RequestRef, RequestState, RequestStatus, TypedClient};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::{sleep, timeout};

use crate::error::CliError;
use crate::output::Output;

/// Delay between two status polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// `--wait-for-request` / `--timeout`, shared by mutating commands
#[derive(Args, Clone, Debug)]
pub struct WaitArgs {
    /// Wait for the request to finish before returning
    #[arg(short = 'w', long)]
    pub wait_for_request: bool,

    /// Timeout in seconds for --wait-for-request
    #[arg(short = 't', long, default_value = "60")]
    pub timeout: u64,
}

impl WaitArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Where a polled job stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Pending,
    Succeeded,
    Failed(String),
}

/// Poll `fetch` until `classify` reports a terminal outcome
///
/// Returns the last fetched status on success. A terminal failure becomes
/// [`CliError::RequestFailed`], an elapsed deadline
/// [`CliError::WaitTimeout`]. Errors from `fetch` end the wait as-is.
pub async fn poll_until<T, F, Fut, C>(
    mut fetch: F,
    classify: C,
    interval: Duration,
    deadline: Duration,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    C: Fn(&T) -> Progress,
{
    let polling = async {
        let mut polls: u32 = 0;
        loop {
            let status = fetch().await?;
            polls += 1;
            match classify(&status) {
                Progress::Succeeded => return Ok(status),
                Progress::Failed(message) => {
                    return Err(CliError::RequestFailed { message }.into());
                }
                Progress::Pending => {
                    tracing::debug!(polls, "request still pending");
                    sleep(interval).await;
                }
            }
        }
    };

    match timeout(deadline, polling).await {
        Ok(result) => result,
        Err(_) => Err(CliError::WaitTimeout { timeout: deadline }.into()),
    }
}

/// Classify a request status
pub fn request_progress(status: &RequestStatus) -> Progress {
    match status.state() {
        Some(RequestState::Done) => Progress::Succeeded,
        Some(RequestState::Failed) => Progress::Failed(
            status
                .message()
                .unwrap_or("request failed without a message")
                .to_string(),
        ),
        Some(RequestState::Queued) | Some(RequestState::Running) | None => Progress::Pending,
    }
}

/// Wait for a request job to finish
pub async fn wait_for_request(
    client: &TypedClient,
    request: &RequestRef,
    deadline: Duration,
    out: &Output,
) -> Result<RequestStatus> {
    let spinner = spinner(out, &format!("Waiting for request {}", request.id));

    let result = poll_until(
        || async { Ok::<_, anyhow::Error>(client.get_request_status(request).await?) },
        |status: &RequestStatus| {
            if let Some(state) = status.state() {
                spinner.set_message(format!("Request {} is {}", request.id, state));
            }
            request_progress(status)
        },
        POLL_INTERVAL,
        deadline,
    )
    .await;

    spinner.finish_and_clear();
    result.with_context(|| format!("waiting for request {}", request.id))
}

/// Wait when `--wait-for-request` was given, otherwise just report the job
pub async fn maybe_wait(
    client: &TypedClient,
    request: Option<&RequestRef>,
    args: &WaitArgs,
    out: &Output,
) -> Result<()> {
    let Some(request) = request else {
        if args.wait_for_request {
            anyhow::bail!("the API did not return a request to wait for");
        }
        return Ok(());
    };

    if !args.wait_for_request {
        out.note(format!("Request {} accepted", request.id));
        return Ok(());
    }

    wait_for_request(client, request, args.timeout(), out).await?;
    out.note(format!("Request {} DONE", request.id));
    Ok(())
}

fn spinner(out: &Output, message: &str) -> ProgressBar {
    if out.quiet || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn scripted(states: &[&str]) -> Mutex<VecDeque<String>> {
        Mutex::new(states.iter().map(|s| s.to_string()).collect())
    }

    fn classify(state: &String) -> Progress {
        match state.as_str() {
            "DONE" => Progress::Succeeded,
            "FAILED" => Progress::Failed("boom".to_string()),
            _ => Progress::Pending,
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_three_polls() {
        let states = scripted(&["SUBMITTED", "SUBMITTED", "DONE"]);
        let polls = Cell::new(0);

        let result = poll_until(
            || {
                polls.set(polls.get() + 1);
                let next = states.lock().unwrap().pop_front();
                async move { next.ok_or_else(|| anyhow::anyhow!("polled too often")) }
            },
            classify,
            Duration::from_millis(1),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(result, "DONE");
        assert_eq!(polls.get(), 3);
    }

    #[tokio::test]
    async fn test_times_out_before_enough_polls() {
        let states = scripted(&["SUBMITTED", "SUBMITTED", "DONE"]);

        let err = poll_until(
            || {
                let next = states.lock().unwrap().pop_front();
                async move { next.ok_or_else(|| anyhow::anyhow!("polled too often")) }
            },
            classify,
            Duration::from_millis(200),
            Duration::from_millis(50),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::WaitTimeout { .. })
        ));
    }

    #[tokio::test]
    async fn test_terminal_failure_is_not_a_timeout() {
        let states = scripted(&["RUNNING", "FAILED"]);

        let err = poll_until(
            || {
                let next = states.lock().unwrap().pop_front();
                async move { next.ok_or_else(|| anyhow::anyhow!("polled too often")) }
            },
            classify,
            Duration::from_millis(1),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

        match err.downcast_ref::<CliError>() {
            Some(CliError::RequestFailed { message }) => assert_eq!(message, "boom"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_ends_wait() {
        let err = poll_until(
            || async { Err::<String, _>(anyhow::anyhow!("connection refused")) },
            classify,
            Duration::from_millis(1),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert!(err.downcast_ref::<CliError>().is_none());
    }

    #[test]
    fn test_request_progress() {
        let status = |json: &str| serde_json::from_str::<RequestStatus>(json).unwrap();

        assert_eq!(
            request_progress(&status(r#"{"metadata": {"status": "QUEUED"}}"#)),
            Progress::Pending
        );
        assert_eq!(
            request_progress(&status(r#"{"metadata": {"status": "DONE"}}"#)),
            Progress::Succeeded
        );
        assert_eq!(
            request_progress(&status(
                r#"{"metadata": {"status": "FAILED", "message": "quota exceeded"}}"#
            )),
            Progress::Failed("quota exceeded".to_string())
        );
        assert_eq!(request_progress(&status("{}")), Progress::Pending);
    }
}
