// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request (asynchronous job) types
//!
//! Every mutating call is accepted by the API and executed asynchronously.
//! The response carries a `Location` header pointing at the status of the
//! request record that tracks it.

use std::collections::HashMap;

use super::common::{Resource, ResourceReference, Timestamp};
use serde::{Deserialize, Serialize};

/// Execution state of a request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RequestState {
    #[serde(alias = "SUBMITTED")]
    #[strum(to_string = "QUEUED", serialize = "SUBMITTED")]
    Queued,
    Running,
    Done,
    Failed,
}

impl RequestState {
    /// Whether the request will not change state any more
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// A resource touched by a request, with its own progress
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestState>,
}

/// Status block of a request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestStatusMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default)]
    pub targets: Vec<RequestTarget>,
}

/// Status record returned by `GET /requests/{id}/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RequestStatusMetadata>,
}

impl RequestStatus {
    pub fn state(&self) -> Option<RequestState> {
        self.metadata.as_ref().and_then(|m| m.status)
    }

    pub fn message(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.message.as_deref())
    }

    pub fn targets(&self) -> &[RequestTarget] {
        self.metadata
            .as_ref()
            .map(|m| m.targets.as_slice())
            .unwrap_or_default()
    }
}

/// Request properties: the original HTTP call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

/// Request metadata, which embeds the status record at depth >= 2
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_status: Option<RequestStatus>,
}

/// Request record
pub type Request = Resource<RequestProperties, RequestMetadata>;

impl Resource<RequestProperties, RequestMetadata> {
    pub fn created(&self) -> Option<Timestamp> {
        self.metadata.as_ref().and_then(|m| m.created_date)
    }

    pub fn status(&self) -> Option<&RequestStatus> {
        self.metadata.as_ref().and_then(|m| m.request_status.as_ref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submitted_is_queued() {
        let s: RequestStatus =
            serde_json::from_str(r#"{"metadata": {"status": "SUBMITTED"}}"#).unwrap();
        assert_eq!(s.state(), Some(RequestState::Queued));
        assert!(!RequestState::Queued.is_terminal());
        assert_eq!("submitted".parse::<RequestState>().unwrap(), RequestState::Queued);
    }

    #[test]
    fn test_terminal_states() {
        assert!(RequestState::Done.is_terminal());
        assert!(RequestState::Failed.is_terminal());
        assert!(!RequestState::Running.is_terminal());
    }

    #[test]
    fn test_request_with_embedded_status() {
        let r: Request = serde_json::from_str(
            r#"{
                "id": "req-1",
                "type": "request",
                "metadata": {
                    "createdDate": "2024-05-01T10:00:00Z",
                    "createdBy": "user@example.com",
                    "requestStatus": {
                        "id": "req-1/status",
                        "metadata": {
                            "status": "FAILED",
                            "message": "quota exceeded",
                            "targets": [{"target": {"id": "ipb-1", "type": "ipblock"}, "status": "FAILED"}]
                        }
                    }
                },
                "properties": {"method": "POST", "url": "https://api.example.com/cloudapi/v6/ipblocks"}
            }"#,
        )
        .unwrap();
        let status = r.status().unwrap();
        assert_eq!(status.state(), Some(RequestState::Failed));
        assert_eq!(status.message(), Some("quota exceeded"));
        assert_eq!(status.targets().len(), 1);
        assert_eq!(r.properties.method.as_deref(), Some("POST"));
    }
}
