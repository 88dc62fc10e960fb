//! Result alias for HTTP handlers.

use crate::problem::Problem;

/// Standard result type for API handlers.
///
/// ```ignore
/// async fn handler() -> ApiResult<Json<Vec<NodeDto>>> {
///     let nodes = svc.list_nodes().await?; // domain error -> Problem
///     Ok(Json(nodes.into_iter().map(Into::into).collect()))
/// }
/// ```
pub type ApiResult<T = ()> = Result<T, Problem>;
