use fedcat_errors::Problem;
use utoipa::OpenApi;
use utoipa::openapi::server::Server;

use super::dto::{CatalogDto, CriterionDto, FederatedCatalogQueryDto, NodeDto};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "fedcat federated catalog API"),
    paths(
        handlers::query_catalog,
        handlers::insert_node,
        handlers::list_participants,
    ),
    components(schemas(
        CriterionDto,
        FederatedCatalogQueryDto,
        NodeDto,
        CatalogDto,
        Problem
    )),
    tags((
        name = "federated-catalog",
        description = "Federated catalog queries and participant directory"
    ))
)]
pub struct ApiDoc;

/// `OpenAPI` document with `base_path` as the only server.
#[must_use]
pub fn openapi_document(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(base_path)]);
    doc
}
