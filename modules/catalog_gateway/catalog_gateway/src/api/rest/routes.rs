use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use std::sync::Arc;

use super::{handlers, openapi};
use crate::domain::service::Service;

/// Federated catalog routes plus `/openapi.json`, relative to `base_path`.
#[must_use]
pub fn router(service: Arc<Service>, base_path: &str) -> Router {
    let doc = openapi::openapi_document(base_path);

    Router::new()
        .route("/federatedcatalog", post(handlers::query_catalog))
        .route("/federatedcatalog/insert", post(handlers::insert_node))
        .route(
            "/federatedcatalog/participants",
            get(handlers::list_participants),
        )
        .route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        )
        .layer(Extension(service))
}
