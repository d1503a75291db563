// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the API

use std::fmt;

use serde::{Deserialize, Serialize};

/// RFC3339 timestamp
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Lifecycle state reported in resource metadata
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ResourceState {
    Available,
    Inactive,
    Busy,
    Deploying,
    Active,
    Failed,
    Suspended,
    FailedSuspended,
    Updating,
    FailedUpdating,
    Destroying,
    FailedDestroying,
    Terminated,
    /// A state this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// Resource metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ResourceState>,
}

/// The envelope every API resource is returned in
///
/// `P` is the resource-specific properties block, `M` the metadata block
/// (plain [`Metadata`] for everything except requests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<P, M = Metadata> {
    /// Resource identifier
    pub id: String,
    /// Resource type (e.g. "backupunit", "image")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Absolute URL of the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<M>,
    /// Absent when listed with `depth=0`
    #[serde(default)]
    pub properties: P,
}

impl<P> Resource<P, Metadata> {
    /// Creation time, if the API returned metadata
    pub fn created(&self) -> Option<Timestamp> {
        self.metadata.as_ref().and_then(|m| m.created_date)
    }

    /// Lifecycle state, if the API returned metadata
    pub fn state(&self) -> Option<ResourceState> {
        self.metadata.as_ref().and_then(|m| m.state)
    }
}

/// A list of resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Body of a `POST` that creates a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest<P> {
    pub properties: P,
}

impl<P> CreateRequest<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }
}

/// Pointer to another resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReference {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// API entry point, returned by `GET /`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub version: String,
}

/// API error response
///
/// ```json
/// {"httpStatus": 404, "messages": [{"errorCode": "309", "message": "Resource does not exist"}]}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(default)]
    pub messages: Vec<ApiErrorMessage>,
}

/// A single message inside an [`ApiError`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            return write!(f, "no error message returned");
        }
        let joined = self
            .messages
            .iter()
            .map(|m| match &m.error_code {
                Some(code) => format!("[{}] {}", code, m.message),
                None => m.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}
