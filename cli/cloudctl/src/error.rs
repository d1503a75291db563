// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI error types
//!
//! Remote API errors pass through untouched as `cloud_client::Error`; the
//! variants here cover what the CLI itself decides is an error.

use std::fmt;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The user answered "no" to a confirmation prompt
    #[error("user denied confirmation")]
    UserDenied,

    #[error("timed out after {timeout:?} waiting for request to finish")]
    WaitTimeout { timeout: Duration },

    #[error("request failed: {message}")]
    RequestFailed { message: String },

    #[error("invalid filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("unknown column '{column}' for --order-by (available: {available})")]
    InvalidOrderBy { column: String, available: String },

    #[error("no {0} matched")]
    NoMatches(&'static str),

    #[error("no {0} found to delete")]
    NothingToDelete(&'static str),

    #[error("nothing to update: pass at least one of {0}")]
    NothingToUpdate(&'static str),

    #[error(
        "no credentials configured: pass --token, or --username and --password, or run 'cloudctl login'"
    )]
    MissingCredentials,

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// Several independent failures collected from a bulk operation
#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<(String, anyhow::Error)>,
}

impl AggregateError {
    pub fn push(&mut self, item: impl Into<String>, error: anyhow::Error) {
        self.errors.push((item.into(), error));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing failed
    pub fn into_result(self) -> Result<(), CliError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CliError::Aggregate(self))
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} operation(s) failed:", self.errors.len())?;
        for (item, error) in &self.errors {
            write!(f, "\n  {}: {:#}", item, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}
