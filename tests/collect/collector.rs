use std::fs;
use std::path::Path;

use crate::common::{client_for, mock_body, mock_price, setup_server};
use quote_snapshot::QuoteSnapshotCollector;
use serde_json::{Value, json};

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn collector(
    server: &httpmock::MockServer,
    symbols: &[&str],
    label: &str,
    path: &Path,
) -> QuoteSnapshotCollector {
    QuoteSnapshotCollector::builder()
        .client(client_for(server))
        .symbols(symbols.iter().copied())
        .timestamp_label(label)
        .target_path(path)
        .build()
        .unwrap()
}

#[tokio::test]
async fn absent_file_gets_exactly_the_new_snapshot() {
    let server = setup_server();
    let _u = mock_price(&server, "U", "10.5");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");

    collector(&server, &["U"], "2024-01-01T00:00:00Z", &path)
        .collect_and_save()
        .await;

    assert_eq!(
        read_json(&path),
        json!({"2024-01-01T00:00:00Z": [{"company name": "U", "price": 10.5}]})
    );
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"2024-01-01T00:00:00Z\": [\n    {\n      \"company name\": \"U\",\n      \"price\": 10.5\n    }\n  ]\n}"
    );
}

#[tokio::test]
async fn empty_and_blank_files_are_treated_as_empty() {
    let server = setup_server();
    let _u = mock_price(&server, "U", "10.5");
    let dir = tempfile::tempdir().unwrap();

    for (name, content) in [("empty.json", ""), ("blank.json", "  \n\t\n")] {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();

        collector(&server, &["U"], "2024-01-01T00:00:00Z", &path)
            .collect_and_save()
            .await;

        assert_eq!(
            read_json(&path),
            json!({"2024-01-01T00:00:00Z": [{"company name": "U", "price": 10.5}]})
        );
    }
}

#[tokio::test]
async fn distinct_labels_accumulate() {
    let server = setup_server();
    let _b = mock_price(&server, "B", "2.25");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"{"t1":[{"company name":"A","price":1}]}"#).unwrap();

    collector(&server, &["B"], "t2", &path).collect_and_save().await;

    assert_eq!(
        read_json(&path),
        json!({
            "t1": [{"company name": "A", "price": 1}],
            "t2": [{"company name": "B", "price": 2.25}]
        })
    );
}

#[tokio::test]
async fn same_label_overwrites_only_that_entry() {
    let server = setup_server();
    let _c = mock_price(&server, "C", "3");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(
        &path,
        r#"{
  "t1": [{"company name": "A", "price": 1}, {"company name": "B", "price": 2}],
  "t2": [{"company name": "Z", "price": 26.125}]
}"#,
    )
    .unwrap();

    collector(&server, &["C"], "t1", &path).collect_and_save().await;

    let written = read_json(&path);
    assert_eq!(written["t1"], json!([{"company name": "C", "price": 3.0}]));
    assert_eq!(written["t2"], json!([{"company name": "Z", "price": 26.125}]));
    assert_eq!(written.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_json_is_discarded() {
    let server = setup_server();
    let _n = mock_price(&server, "N", "7.75");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, "{ this is not json").unwrap();

    collector(&server, &["N"], "t9", &path).collect_and_save().await;

    assert_eq!(
        read_json(&path),
        json!({"t9": [{"company name": "N", "price": 7.75}]})
    );
}

#[tokio::test]
async fn failed_symbols_are_absent_and_nothing_escapes() {
    let server = setup_server();
    let _a = mock_price(&server, "AAPL", "180.25");
    let _x = mock_body(&server, "XXXX", 200, r#"{"Global Quote": {}}"#.to_string());
    let _e = mock_body(&server, "ERR", 502, "bad gateway".to_string());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");

    collector(&server, &["XXXX", "AAPL", "ERR"], "t", &path)
        .collect_and_save()
        .await;

    assert_eq!(
        read_json(&path),
        json!({"t": [{"company name": "AAPL", "price": 180.25}]})
    );
}

#[tokio::test]
async fn worst_case_still_writes_an_empty_snapshot() {
    let server = setup_server();
    let _e = mock_body(&server, "ERR", 500, "boom".to_string());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, "[not, an, archive").unwrap();

    collector(&server, &["ERR"], "t", &path).collect_and_save().await;

    assert_eq!(read_json(&path), json!({"t": []}));
}

#[tokio::test]
async fn repeated_run_with_same_label_is_idempotent() {
    let server = setup_server();
    let m = mock_price(&server, "AAPL", "180.25");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    fs::write(&path, r#"{"t0": []}"#).unwrap();

    let c = collector(&server, &["AAPL"], "t1", &path);
    c.collect_and_save().await;
    let first = fs::read_to_string(&path).unwrap();
    c.collect_and_save().await;
    let second = fs::read_to_string(&path).unwrap();

    m.assert_hits(2);
    assert_eq!(first, second);
    assert_eq!(
        read_json(&path),
        json!({"t0": [], "t1": [{"company name": "AAPL", "price": 180.25}]})
    );
}

#[tokio::test]
async fn unwritable_target_is_absorbed() {
    let server = setup_server();
    let _a = mock_price(&server, "AAPL", "1");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("quotes.json");

    collector(&server, &["AAPL"], "t", &path).collect_and_save().await;

    assert!(!path.exists());
}
