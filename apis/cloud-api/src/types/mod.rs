// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! API type definitions

pub mod backup_unit;
pub mod common;
pub mod image;
pub mod ip_block;
pub mod pcc;
pub mod request;
pub mod template;

pub use backup_unit::*;
pub use common::*;
pub use image::*;
pub use ip_block::*;
pub use pcc::*;
pub use request::*;
pub use template::*;
