//! Wire-contract tests for the logging endpoint over real HTTP.
//!
//! The in-process handler tests live beside the route; these exercise the
//! served application with a plain HTTP client, pinning the §6 response
//! bodies a non-Rust front end would see.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use csel_api::{AppState, Journal};

async fn spawn_app(journal: Journal) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = csel_api::app(AppState::new(journal));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn line_count(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .map(|c| c.lines().count())
        .unwrap_or(0)
}

struct TestServer {
    addr: SocketAddr,
    journal_path: PathBuf,
    _dir: tempfile::TempDir,
}

async fn test_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let journal_path = dir.path().join("logs/events.log");
    let addr = spawn_app(Journal::new(&journal_path)).await;
    TestServer {
        addr,
        journal_path,
        _dir: dir,
    }
}

impl TestServer {
    fn url(&self) -> String {
        format!("http://{}/api/log", self.addr)
    }
}

#[tokio::test]
async fn submit_returns_ok_true_and_appends_one_line() {
    let server = test_server().await;
    let body = serde_json::json!({
        "action": "submit",
        "payload": {"client": null, "primaryContact": null, "secondaryContact": null}
    });

    let response = reqwest::Client::new()
        .post(server.url())
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack, serde_json::json!({"ok": true}));
    assert_eq!(line_count(&server.journal_path), 1);

    let line = std::fs::read_to_string(&server.journal_path).unwrap();
    let entry: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(entry["timestamp"].as_str().unwrap()).is_ok());
    assert_eq!(entry["payload"]["client"], serde_json::Value::Null);
}

#[tokio::test]
async fn bogus_action_returns_400_and_journal_is_unchanged() {
    let server = test_server().await;

    // Seed one valid line so "unchanged" is observable.
    reqwest::Client::new()
        .post(server.url())
        .json(&serde_json::json!({"action": "create", "field": "client"}))
        .send()
        .await
        .unwrap();
    assert_eq!(line_count(&server.journal_path), 1);

    let response = reqwest::Client::new()
        .post(server.url())
        .json(&serde_json::json!({"action": "bogus"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Invalid request format");
    assert_eq!(line_count(&server.journal_path), 1);
}

#[tokio::test]
async fn unparseable_body_returns_400_json_error() {
    let server = test_server().await;

    let response = reqwest::Client::new()
        .post(server.url())
        .header("content-type", "application/json")
        .body("{definitely not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Invalid JSON in request body");
    assert_eq!(line_count(&server.journal_path), 0);
}

#[tokio::test]
async fn concurrent_appends_never_corrupt_earlier_lines() {
    let server = test_server().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..10 {
        let client = client.clone();
        let url = server.url();
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&serde_json::json!({"action": "update", "payload": {"i": i}}))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), 200);
    }

    // Every line parses: appends interleave at line level only.
    let content = std::fs::read_to_string(&server.journal_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);
    for line in lines {
        let entry: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(entry["action"], "update");
    }
}
