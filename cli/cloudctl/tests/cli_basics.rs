// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - no API access required

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

mod common;

use common::{cloudctl_cmd, config_dir};
use predicates::prelude::*;

#[test]
fn test_version() {
    let dir = config_dir();
    cloudctl_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudctl"));
}

#[test]
fn test_help() {
    let dir = config_dir();
    cloudctl_cmd(&dir)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("ipblock"))
        .stdout(predicate::str::contains("request"));
}

#[test]
fn test_no_subcommand_fails() {
    let dir = config_dir();
    cloudctl_cmd(&dir).assert().failure();
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = config_dir();
    cloudctl_cmd(&dir)
        .arg("datacenter")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let dir = config_dir();
    cloudctl_cmd(&dir)
        .args(["-q", "-v", "ipblock", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_credentials() {
    let dir = config_dir();
    cloudctl_cmd(&dir)
        .args(["ipblock", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no credentials configured"));
}

#[test]
fn test_completion_bash() {
    let dir = config_dir();
    cloudctl_cmd(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudctl"));
}

#[test]
fn test_login_with_token_then_logout() {
    let dir = config_dir();
    let file = dir.path().join("config.json");

    cloudctl_cmd(&dir)
        .args(["--token", "stored-token", "login", "--skip-verify"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&file).unwrap_or_default();
    assert!(saved.contains("stored-token"), "config was: {}", saved);

    cloudctl_cmd(&dir).arg("logout").assert().success();
    assert!(!file.exists());
}

#[test]
fn test_logout_without_config() {
    let dir = config_dir();
    cloudctl_cmd(&dir).arg("logout").assert().success();
}
