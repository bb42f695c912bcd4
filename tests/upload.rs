/// Integration tests for the upload session
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;

use printforge::catalog::{CatalogSource, MaterialCatalog};
use printforge::client::PrintServiceClient;
use printforge::config::ServiceConfig;
use printforge::error::WorkflowError;
use printforge::models::Material;
use printforge::upload::UploadSession;

fn fallback_material() -> Material {
    Material {
        id: 1,
        family: "PLA".to_string(),
        brand: "Generic".to_string(),
        color_name: "Natural".to_string(),
        hex: "#FFFFFF".to_string(),
        density: 1.24,
        cost_per_kg: 45.0,
        surcharge: 0.0,
        active: true,
    }
}

fn materials_json() -> serde_json::Value {
    json!([{
        "id": 1,
        "family": "PLA",
        "brand": "Generic",
        "color_name": "Natural",
        "hex": "#FFFFFF",
        "density": 1.24,
        "cost_per_kg": 45.0,
        "surcharge": 0.0,
        "active": true,
    }])
}

fn upload_json(model_id: u64, filename: &str) -> serde_json::Value {
    json!({
        "model_id": model_id,
        "filename": filename,
        "volume_mm3": 8000.0,
        "surface_mm2": 2400.0,
        "weight_g": 9.9,
    })
}

fn build_session(server: &MockServer) -> (Arc<MaterialCatalog>, UploadSession) {
    let client = Arc::new(PrintServiceClient::new(&ServiceConfig {
        base_url: server.base_url(),
        timeout_seconds: 5,
    }));
    let catalog = Arc::new(MaterialCatalog::new(client.clone(), fallback_material()));
    let session = UploadSession::new(client, catalog.clone());
    (catalog, session)
}

#[tokio::test]
async fn submit_replaces_model_and_refreshes_catalog_once() {
    let server = MockServer::start_async().await;

    let materials_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/materials");
            then.status(200).json_body(materials_json());
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/upload");
            then.status(200).json_body(upload_json(42, "cube.stl"));
        })
        .await;

    let (catalog, session) = build_session(&server);
    catalog.load().await.unwrap();
    assert!(session.current().await.is_none());

    let receipt = session
        .submit(b"solid cube".to_vec(), "cube.stl")
        .await
        .unwrap();
    assert_eq!(receipt.model_id, 42);
    assert_eq!(receipt.weight_g, 9.9);

    let current = session.current().await.unwrap();
    assert_eq!(current.model_id, 42);
    assert_eq!(current.display_name, "cube.stl");

    // Initial load plus exactly one refresh after the upload.
    materials_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn failed_upload_keeps_previous_model() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/materials");
            then.status(200).json_body(materials_json());
        })
        .await;

    let ok_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/upload");
            then.status(200).json_body(upload_json(42, "first.stl"));
        })
        .await;

    let (catalog, session) = build_session(&server);
    catalog.load().await.unwrap();
    session
        .submit(b"solid first".to_vec(), "first.stl")
        .await
        .unwrap();

    ok_mock.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/upload");
            then.status(400).json_body(json!({"detail": "Empty file"}));
        })
        .await;

    let err = session
        .submit(Vec::new(), "broken.stl")
        .await
        .unwrap_err();
    match err {
        WorkflowError::Transport(transport) => {
            assert_eq!(transport.to_string(), "service returned 400: Empty file");
        }
        other => panic!("expected transport error, got {:?}", other),
    }

    // The session still holds the model from the successful upload.
    let current = session.current().await.unwrap();
    assert_eq!(current.model_id, 42);
    assert_eq!(current.display_name, "first.stl");
}

#[tokio::test]
async fn refresh_failure_does_not_roll_back_upload() {
    let server = MockServer::start_async().await;

    let ok_materials = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/materials");
            then.status(200).json_body(materials_json());
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/upload");
            then.status(200).json_body(upload_json(42, "cube.stl"));
        })
        .await;

    let (catalog, session) = build_session(&server);
    catalog.load().await.unwrap();

    // Catalog endpoint goes down between the load and the upload.
    ok_materials.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/materials");
            then.status(500).body("boom");
        })
        .await;

    let receipt = session
        .submit(b"solid cube".to_vec(), "cube.stl")
        .await
        .unwrap();
    assert_eq!(receipt.model_id, 42);

    // Upload survived, and the catalog kept its last good list.
    assert!(session.current().await.is_some());
    assert_eq!(catalog.snapshot().source, CatalogSource::Remote);
    assert_eq!(catalog.snapshot().materials.len(), 1);
}

#[tokio::test]
async fn uploads_model_file_read_from_disk() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/materials");
            then.status(200).json_body(materials_json());
        })
        .await;

    let upload_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/upload")
                .body_includes("solid bracket");
            then.status(200).json_body(upload_json(7, "bracket.stl"));
        })
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "solid bracket\nendsolid bracket\n").unwrap();

    let (catalog, session) = build_session(&server);
    catalog.load().await.unwrap();

    let bytes = tokio::fs::read(file.path()).await.unwrap();
    let receipt = session.submit(bytes, "bracket.stl").await.unwrap();
    assert_eq!(receipt.model_id, 7);

    upload_mock.assert_async().await;
}
