// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cloud management API data model
//!
//! Serde definitions for the records exchanged with the cloud management
//! REST API (version 6): backup units, images and CD-ROMs, IP blocks and
//! their consumers, private cross-connects, templates, and the request
//! records that track asynchronous mutations.
//!
//! Every resource shares the same envelope (`id`, `type`, `href`,
//! `metadata`, `properties`), modelled here by [`Resource`]. Collections
//! come back as [`Collection`].

pub mod types;
pub use types::*;

/// Default API endpoint used when no override is configured
pub const DEFAULT_API_URL: &str = "https://api.ionos.com/cloudapi/v6";
