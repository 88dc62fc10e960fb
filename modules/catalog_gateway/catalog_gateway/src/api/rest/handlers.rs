use axum::body::Bytes;
use axum::extract::OriginalUri;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use fedcat_errors::{ApiResult, Problem, bad_request};
use http::StatusCode;
use std::sync::Arc;

use super::dto::{CatalogDto, FederatedCatalogQueryDto, NodeDto};
use super::error::domain_error_to_problem;
use crate::domain::service::Service;

fn invalid_body(detail: impl Into<String>, instance: &str) -> Problem {
    bad_request(detail)
        .with_code("CATALOG_GATEWAY_VALIDATION")
        .with_instance(instance)
        .with_current_span()
}

/// Query the federated catalog
///
/// An empty body is the same as a query without criteria.
#[utoipa::path(
    post,
    path = "/federatedcatalog",
    tag = "federated-catalog",
    request_body(content = FederatedCatalogQueryDto, description = "Optional query criteria"),
    responses(
        (status = 200, description = "Projected catalogs", body = Vec<CatalogDto>),
        (status = 400, description = "Malformed body or no adapter can execute the query",
            body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Query execution failed",
            body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn query_catalog(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> ApiResult<Json<Vec<CatalogDto>>> {
    let dto: FederatedCatalogQueryDto = if body.iter().all(u8::is_ascii_whitespace) {
        FederatedCatalogQueryDto::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| invalid_body(format!("Invalid query body: {e}"), uri.path()))?
    };

    let catalogs = svc
        .query(&dto.into())
        .await
        .map_err(|e| domain_error_to_problem(e, uri.path()))?;

    Ok(Json(catalogs.into_iter().map(Into::into).collect()))
}

/// Register a participant node
///
/// A node whose URL is already known replaces the existing entry.
#[utoipa::path(
    post,
    path = "/federatedcatalog/insert",
    tag = "federated-catalog",
    request_body = NodeDto,
    responses(
        (status = 200, description = "Node registered"),
        (status = 400, description = "Invalid node", body = Problem,
            content_type = "application/problem+json"),
    )
)]
pub async fn insert_node(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<NodeDto>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(dto) = body.map_err(|e| invalid_body(e.body_text(), uri.path()))?;

    svc.register_node(dto.into())
        .await
        .map_err(|e| domain_error_to_problem(e, uri.path()))?;

    Ok(StatusCode::OK)
}

/// List participant nodes
#[utoipa::path(
    get,
    path = "/federatedcatalog/participants",
    tag = "federated-catalog",
    responses(
        (status = 200, description = "Known nodes", body = Vec<NodeDto>),
        (status = 500, description = "Internal error", body = Problem,
            content_type = "application/problem+json"),
    )
)]
pub async fn list_participants(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Json<Vec<NodeDto>>> {
    let nodes = svc
        .list_nodes()
        .await
        .map_err(|e| domain_error_to_problem(e, uri.path()))?;

    Ok(Json(nodes.into_iter().map(Into::into).collect()))
}
