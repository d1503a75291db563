// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CLOUDCTL_CONFIG_DIR";

/// Get the cloudctl configuration directory
///
/// Priority:
/// 1. CLOUDCTL_CONFIG_DIR environment variable
/// 2. Platform config dir (~/.config/cloudctl/ on Linux)
/// 3. ~/.cloudctl/ when no platform config dir is known
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("cloudctl"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cloudctl")
        })
}

/// Get the path to the config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(config_dir())
}
