//! Tests for record sources that do not need a running engine.

use pullbar::record::RecordReader;
use pullbar::source::{open_replay, paced, EngineClient, EngineConfig};
use pullbar::Error;
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tokio::io::BufReader;

mod common;
use common::helpers::ndjson;

#[tokio::test]
async fn test_open_replay_missing_file() {
    let result = open_replay(Path::new("/nonexistent/pullbar/replay.jsonl"), None).await;
    match result {
        Err(Error::SourceConstruction(msg)) => assert!(msg.contains("cannot open replay")),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("opened a missing file"),
    }
}

#[tokio::test]
async fn test_paced_source_keeps_records() {
    let stream = ndjson(&[
        json!({ "status": "Downloading", "id": "a", "progressDetail": { "current": 1, "total": 2 } }),
        json!({ "status": "Pull complete", "id": "a" }),
    ]);
    let source = paced(BufReader::new(std::io::Cursor::new(stream)), Duration::from_millis(1));

    let mut records = RecordReader::new(source);
    let first = records.next_record().await.unwrap().unwrap();
    let second = records.next_record().await.unwrap().unwrap();
    assert_eq!(first["progressDetail"]["current"], 1);
    assert_eq!(second["status"], "Pull complete");
    assert!(records.next_record().await.unwrap().is_none());
    assert_eq!(records.records(), 2);
}

#[tokio::test]
async fn test_engine_rejects_unknown_scheme() {
    let config = EngineConfig {
        host: "ssh://engine.example".into(),
        ..EngineConfig::default()
    };
    assert!(matches!(
        EngineClient::new(config),
        Err(Error::SourceConstruction(_))
    ));
}
