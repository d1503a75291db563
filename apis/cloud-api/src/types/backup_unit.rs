// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Backup unit types

use super::common::Resource;
use serde::{Deserialize, Serialize};

/// Backup unit properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupUnitProperties {
    /// Alphanumeric name, unique per contract
    #[serde(default)]
    pub name: String,
    /// Password of the backup unit (write-only, never returned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Email address of the backup unit owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Backup unit
pub type BackupUnit = Resource<BackupUnitProperties>;

/// Fields that can be changed on an existing backup unit
///
/// The name is fixed at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBackupUnitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Single sign-on URL for the backup portal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupUnitSso {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_url: Option<String>,
}
