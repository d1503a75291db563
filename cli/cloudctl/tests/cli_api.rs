// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! End-to-end command tests against a mock API server
//!
//! The binary runs as a blocking child process, so the mock server needs
//! a multi-threaded runtime to keep answering while the test waits.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated, clippy::unwrap_used)]

mod common;

use common::{backup_unit, cloudctl_against, collection, config_dir, ip_block, request_status};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_ip_blocks(server: &MockServer, blocks: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/ipblocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection("ipblocks", blocks)))
        .mount(server)
        .await;
}

fn accepted(server: &MockServer, request_id: &str) -> ResponseTemplate {
    ResponseTemplate::new(202).insert_header(
        "Location",
        format!("{}/requests/{}/status", server.uri(), request_id),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn test_backupunit_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backupunits"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("depth", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(
            "backupunits",
            vec![backup_unit("bu-1", "nightly"), backup_unit("bu-2", "weekly")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["backupunit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BackupUnitId"))
        .stdout(predicate::str::contains("nightly"))
        .stdout(predicate::str::contains("bu-2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_column_warns_but_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backupunits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(
            "backupunits",
            vec![backup_unit("bu-1", "nightly")],
        )))
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["backupunit", "list", "--cols", "name,Bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nightly"))
        .stdout(predicate::str::contains("ops@example.com").not())
        .stderr(predicate::str::contains("unknown column 'Bogus'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_output() {
    let server = MockServer::start().await;
    mock_ip_blocks(
        &server,
        vec![ip_block("ipb-1", "web"), ip_block("ipb-2", "db")],
    )
    .await;

    let dir = config_dir();
    let output = cloudctl_against(&dir, &server.uri())
        .args(["-o", "json", "ipblock", "list", "--order-by", "Name"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ipb-2", "ipb-1"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_filter_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["ipblock", "list", "--filters", "Colour=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ipblocks/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "httpStatus": 404,
            "messages": [{"errorCode": "309", "message": "Resource does not exist"}]
        })))
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["ipblock", "get", "-i", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource does not exist"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_all_continues_past_failures() {
    let server = MockServer::start().await;
    mock_ip_blocks(
        &server,
        vec![
            ip_block("ipb-1", "a"),
            ip_block("ipb-2", "b"),
            ip_block("ipb-3", "c"),
        ],
    )
    .await;
    for id in ["ipb-1", "ipb-3"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/ipblocks/{}", id)))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path("/ipblocks/ipb-2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["--force", "ipblock", "delete", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 operation(s) failed"))
        .stderr(predicate::str::contains("ipb-2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_all_list_failure_deletes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ipblocks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["--force", "ipblock", "delete", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("listing ip block"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_all_empty_list() {
    let server = MockServer::start().await;
    mock_ip_blocks(&server, vec![]).await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["--force", "ipblock", "delete", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no ip block found to delete"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_denied_confirmation_deletes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["ipblock", "delete", "-i", "ipb-1"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("user denied confirmation"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_confirmed_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ipblocks/ipb-1"))
        .respond_with(accepted(&server, "req-9"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["ipblock", "delete", "-i", "ipb-1"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Request req-9 accepted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_image_list_no_match_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(
            "images",
            vec![json!({
                "id": "img-1",
                "properties": {"name": "debian", "location": "de/fra", "imageType": "HDD"}
            })],
        )))
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["image", "list", "--location", "us/las"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no images matched"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_image_latest_applies_after_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(
            "images",
            vec![
                json!({
                    "id": "cd-old",
                    "metadata": {"createdDate": "2024-01-01T00:00:00Z"},
                    "properties": {"name": "rescue", "location": "de/fra", "imageType": "CDROM"}
                }),
                json!({
                    "id": "hdd-new",
                    "metadata": {"createdDate": "2024-06-01T00:00:00Z"},
                    "properties": {"name": "debian", "location": "de/fra", "imageType": "HDD"}
                }),
            ],
        )))
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["image", "list", "--latest", "1", "--filters", "ImageType=CDROM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd-old"))
        .stdout(predicate::str::contains("hdd-new").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_at_depth_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ipblocks"))
        .and(query_param("depth", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection(
            "ipblocks",
            vec![json!({"id": "ipb-1", "type": "ipblock", "href": "https://api.example.com/ipblocks/ipb-1"})],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["ipblock", "list", "--depth", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ipb-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_and_wait() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ipblocks"))
        .respond_with(accepted(&server, "req-1").set_body_json(ip_block("ipb-new", "edge")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/req-1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_status("req-1", "DONE")))
        .expect(1..)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["ipblock", "create", "-n", "edge", "-w"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ipb-new"))
        .stderr(predicate::str::contains("Request req-1 DONE"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_request_wait_polls_until_done() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/requests/req-2/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_status("req-2", "RUNNING")))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests/req-2/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_status("req-2", "DONE")))
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["request", "wait", "-i", "req-2", "-t", "30"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Request req-2 DONE"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_request_wait_reports_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/requests/req-3/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(request_status("req-3", "FAILED")))
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["request", "wait", "-i", "req-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_without_fields_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let dir = config_dir();
    cloudctl_against(&dir, &server.uri())
        .args(["pcc", "update", "-i", "pcc-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_verifies_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("authorization", "Bearer good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Cloud API",
            "href": server.uri(),
            "version": "6.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = config_dir();
    common::cloudctl_cmd(&dir)
        .args(["-u", &server.uri(), "--token", "good-token", "login"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Credentials saved"));

    assert!(dir.path().join("config.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected_saves_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = config_dir();
    common::cloudctl_cmd(&dir)
        .args(["-u", &server.uri(), "--token", "bad-token", "login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to authenticate"));

    assert!(!dir.path().join("config.json").exists());
}
