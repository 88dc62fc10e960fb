#![allow(clippy::unwrap_used, clippy::expect_used)]

//! HTTP tests for the catalog gateway REST API
//!
//! Drive the module router with `oneshot` and check status codes and bodies.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::Router;
use catalog_gateway::CatalogGateway;
use catalog_gateway::config::{CatalogGatewayConfig, SeedCatalogConfig};
use node_directory::NodeDirectory;
use node_directory::config::NodeDirectoryConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

const BASE: &str = "/api/v1";

fn seed(id: &str, origin: &str, title: &str) -> SeedCatalogConfig {
    SeedCatalogConfig {
        id: id.to_owned(),
        participant_id: None,
        origin: origin.to_owned(),
        datasets: vec![json!({"@id": format!("{id}-ds")})],
        properties: serde_json::from_value(json!({ "dct:title": title })).unwrap(),
    }
}

fn app() -> Router {
    let directory = NodeDirectory::init(&NodeDirectoryConfig::default()).unwrap();
    let cfg = CatalogGatewayConfig {
        seed_catalogs: vec![
            seed("cat-a", "http://a.example/dsp", "OBD traces"),
            seed("cat-b", "http://b.example/dsp", "Invoices"),
        ],
        ..CatalogGatewayConfig::default()
    };
    let gateway = CatalogGateway::init(&cfg, directory.client()).unwrap();
    Router::new().nest(BASE, gateway.router(BASE))
}

async fn call(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, bytes.to_vec())
}

#[tokio::test]
async fn test_query_without_body_returns_all_catalogs() {
    let (status, _, body) = call(app(), "POST", "/api/v1/federatedcatalog", None).await;

    assert_eq!(status, StatusCode::OK);
    let catalogs: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(catalogs.len(), 2);
    assert_eq!(catalogs[0]["@id"], "cat-a");
    assert_eq!(catalogs[0]["@type"], "dcat:Catalog");
    assert_eq!(catalogs[0]["originator"], "http://a.example/dsp");
    assert_eq!(catalogs[1]["dct:title"], "Invoices");
}

#[tokio::test]
async fn test_query_with_criteria_filters() {
    let (status, _, body) = call(
        app(),
        "POST",
        "/api/v1/federatedcatalog",
        Some(json!({"criteria": [{
            "operandLeft": "dct:title",
            "operator": "like",
            "operandRight": "OBD%"
        }]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let catalogs: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0]["@id"], "cat-a");
}

#[tokio::test]
async fn test_query_with_unsupported_operator_is_not_accepted() {
    let (status, content_type, body) = call(
        app(),
        "POST",
        "/api/v1/federatedcatalog",
        Some(json!({"criteria": [{"operandLeft": "id", "operator": "~", "operandRight": "x"}]})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    let problem: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["code"], "CATALOG_GATEWAY_QUERY_NOT_ACCEPTED");
    assert_eq!(problem["instance"], "/api/v1/federatedcatalog");
}

#[tokio::test]
async fn test_query_with_malformed_body_is_bad_request() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/federatedcatalog")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_insert_then_list_participants() {
    let app = app();

    let (status, _, body) = call(
        app.clone(),
        "POST",
        "/api/v1/federatedcatalog/insert",
        Some(json!({
            "name": "Node 1",
            "url": "http://192.168.0.41:8282/protocol",
            "supportedProtocols": ["dataspace-protocol-http"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, _, body) = call(app, "GET", "/api/v1/federatedcatalog/participants", None).await;
    assert_eq!(status, StatusCode::OK);
    let nodes: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        nodes,
        json!([{
            "name": "Node 1",
            "url": "http://192.168.0.41:8282/protocol",
            "supportedProtocols": ["dataspace-protocol-http"]
        }])
    );
}

#[tokio::test]
async fn test_insert_invalid_node_is_problem() {
    let (status, content_type, body) = call(
        app(),
        "POST",
        "/api/v1/federatedcatalog/insert",
        Some(json!({"name": "Node 1", "url": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    let problem: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["code"], "CATALOG_GATEWAY_VALIDATION");
    assert_eq!(problem["status"], 400);
}

#[tokio::test]
async fn test_insert_missing_fields_is_bad_request() {
    let (status, _, body) = call(
        app(),
        "POST",
        "/api/v1/federatedcatalog/insert",
        Some(json!({"name": "Node 1"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["code"], "CATALOG_GATEWAY_VALIDATION");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (status, content_type, body) = call(app(), "GET", "/api/v1/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert!(doc.is_object());
    assert!(doc["openapi"].as_str().is_some_and(|v| v.starts_with("3.")));
    assert_eq!(doc["info"]["title"], "fedcat federated catalog API");
    assert_eq!(doc["servers"][0]["url"], BASE);
    for path in [
        "/federatedcatalog",
        "/federatedcatalog/insert",
        "/federatedcatalog/participants",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
}
