// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client error type

use cloud_api::ApiError;
use reqwest::StatusCode;

/// Errors returned by [`crate::TypedClient`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {body}")]
    Api { status: StatusCode, body: ApiError },

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
