// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server template types

use super::common::Resource;
use serde::{Deserialize, Serialize};

/// Template properties
///
/// Templates are read-only presets for cube servers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<f64>,
    /// RAM in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<f64>,
    /// Storage size in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_size: Option<f64>,
}

/// Template
pub type Template = Resource<TemplateProperties>;
