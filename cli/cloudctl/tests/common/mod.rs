// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for cloudctl integration tests
//!
//! Every command runs with an empty temporary config directory and no
//! `CLOUDCTL_*` variables inherited from the developer's shell.

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated, clippy::expect_used)]

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

const INHERITED_ENV: &[&str] = &[
    "CLOUDCTL_API_URL",
    "CLOUDCTL_USERNAME",
    "CLOUDCTL_PASSWORD",
    "CLOUDCTL_TOKEN",
    "CLOUDCTL_CONTRACT",
    "RUST_LOG",
];

/// Get a Command for running the cloudctl binary in `config_dir`
pub fn cloudctl_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cloudctl").expect("Failed to find cloudctl binary");
    for key in INHERITED_ENV {
        cmd.env_remove(key);
    }
    cmd.env("CLOUDCTL_CONFIG_DIR", config_dir.path());
    cmd
}

/// A cloudctl Command pointed at a mock API with a bearer token
pub fn cloudctl_against(config_dir: &TempDir, api_url: &str) -> Command {
    let mut cmd = cloudctl_cmd(config_dir);
    cmd.env("CLOUDCTL_API_URL", api_url)
        .env("CLOUDCTL_TOKEN", "test-token");
    cmd
}

pub fn config_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp config dir")
}

/// Wrap resources in a collection envelope
pub fn collection(kind: &str, items: Vec<Value>) -> Value {
    json!({
        "id": kind,
        "type": "collection",
        "href": format!("https://api.example.com/cloudapi/v6/{}", kind),
        "items": items,
    })
}

pub fn ip_block(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "ipblock",
        "metadata": {"state": "AVAILABLE", "createdDate": "2024-01-01T00:00:00Z"},
        "properties": {
            "name": name,
            "location": "de/fra",
            "size": 1,
            "ips": ["192.0.2.1"],
        },
    })
}

pub fn backup_unit(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "backupunit",
        "metadata": {"state": "AVAILABLE"},
        "properties": {"name": name, "email": "ops@example.com"},
    })
}

pub fn request_status(id: &str, status: &str) -> Value {
    json!({
        "id": format!("{}/status", id),
        "type": "request-status",
        "metadata": {"status": status, "message": format!("request is {}", status)},
    })
}
