//! End-to-end tests for the upload event handler.

use ventas_event::{EventHandler, UploadEvent};
use ventas_ingest::read_csv_bytes;
use ventas_store::{MemoryStore, ObjectStore, OutputTarget};

fn upload_event(bucket: &str, key: &str) -> UploadEvent {
    UploadEvent::from_json(&format!(
        r#"{{"Records":[{{"s3":{{"bucket":{{"name":"{bucket}"}},"object":{{"key":"{key}"}}}}}}]}}"#,
    ))
    .unwrap()
}

const SALES_CSV: &[u8] = b"Precio Unitario,Cliente\n10,ana\n-5,ana\n,leo\n10,ANA\n";

#[test]
fn upload_is_cleaned_and_written_to_the_output_target() {
    let store = MemoryStore::new();
    store
        .put("uploads", "raw/ventas.csv", SALES_CSV, "text/csv")
        .unwrap();
    let handler = EventHandler::new(&store, OutputTarget::new("clean", "processed/"));

    let response = handler.handle(&upload_event("uploads", "raw/ventas.csv"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "OK -> s3://clean/processed/ventas.csv");

    let written = store.get("clean", "processed/ventas.csv").unwrap();
    let df = read_csv_bytes(&written).unwrap();
    assert_eq!(df.height(), 2);
    let cliente = df.column("cliente").unwrap().str().unwrap();
    assert_eq!(cliente.get(0), Some("ana"));
    assert_eq!(cliente.get(1), Some("ANA"));
}

#[test]
fn url_encoded_keys_are_decoded_before_lookup() {
    let store = MemoryStore::new();
    store
        .put("uploads", "raw/ventas 2024.csv", SALES_CSV, "text/csv")
        .unwrap();
    let handler = EventHandler::new(&store, OutputTarget::new("clean", "processed/"));

    let response = handler.handle(&upload_event("uploads", "raw/ventas+2024.csv"));

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "OK -> s3://clean/processed/ventas 2024.csv");
}

#[test]
fn missing_source_reports_failure_without_writing() {
    let store = MemoryStore::new();
    let handler = EventHandler::new(&store, OutputTarget::new("clean", "processed/"));

    let response = handler.handle(&upload_event("uploads", "raw/missing.csv"));

    assert_eq!(response.status, 500);
    assert!(response.body.starts_with("Error: "));
    assert!(response.body.contains("s3://uploads/raw/missing.csv"));
    assert!(store.is_empty());
}

#[test]
fn missing_filter_column_reports_failure_without_writing() {
    let store = MemoryStore::new();
    store
        .put("uploads", "raw/otros.csv", b"Total,Cliente\n10,ana\n", "text/csv")
        .unwrap();
    let handler = EventHandler::new(&store, OutputTarget::new("clean", "processed/"));

    let response = handler.handle(&upload_event("uploads", "raw/otros.csv"));

    assert_eq!(response.status, 500);
    assert!(response.body.contains("precio_unitario"));
    assert_eq!(store.len(), 1);
}

#[test]
fn event_without_records_reports_failure() {
    let store = MemoryStore::new();
    let handler = EventHandler::new(&store, OutputTarget::new("clean", "processed/"));
    let event = UploadEvent::from_json(r#"{"Records":[]}"#).unwrap();

    let response = handler.handle(&event);

    assert_eq!(response.status, 500);
    assert!(response.body.contains("no records"));
}

#[test]
fn configured_filter_column_overrides_the_default() {
    let store = MemoryStore::new();
    store
        .put("uploads", "raw/ventas.csv", b"Ventas,Cliente\n10,ana\n0,leo\n", "text/csv")
        .unwrap();
    let handler = EventHandler::new(&store, OutputTarget::new("clean", "processed/"))
        .with_filter_column("ventas");

    let response = handler.handle(&upload_event("uploads", "raw/ventas.csv"));

    assert_eq!(response.status, 200);
    let written = store.get("clean", "processed/ventas.csv").unwrap();
    let df = read_csv_bytes(&written).unwrap();
    assert_eq!(df.height(), 1);
}
