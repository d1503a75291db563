// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image and CD-ROM types
//!
//! A CD-ROM attached to a server is an image of type `CDROM`, so both share
//! the same record.

use super::common::Resource;
use serde::{Deserialize, Serialize};

/// Image type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ImageType {
    Hdd,
    Cdrom,
    #[serde(other)]
    Unknown,
}

/// Image properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Location (e.g. "de/fra")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Size in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_hot_plug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_hot_plug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_hot_plug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc_virtio_hot_plug: Option<bool>,
    /// OS licence type (LINUX, WINDOWS, WINDOWS2016, UNKNOWN, OTHER, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Aliases usable in place of the image id (e.g. "ubuntu:latest")
    #[serde(default)]
    pub image_aliases: Vec<String>,
    /// Cloud-init compatibility (NONE, V1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_init: Option<String>,
}

/// Image
pub type Image = Resource<ImageProperties>;

/// CD-ROM attached to a server
pub type Cdrom = Image;

/// Mutable image fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_init: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_hot_plug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_hot_plug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_hot_plug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc_virtio_hot_plug: Option<bool>,
}

/// Body used to attach a CD-ROM image to a server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachCdromRequest {
    /// Image id
    pub id: String,
}
