use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use catalog_gateway::CatalogGateway;
use http::StatusCode;
use node_directory::NodeDirectory;
use serde_json::{Value, json};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::signals;

/// Initialized modules, in dependency order.
pub struct Modules {
    pub node_directory: NodeDirectory,
    pub catalog_gateway: CatalogGateway,
}

/// Build every module from its config section.
///
/// # Errors
/// Fails if any module rejects its configuration (e.g. an invalid seed).
pub fn init_modules(config: &AppConfig) -> Result<Modules> {
    let node_directory =
        NodeDirectory::init(&config.node_directory).context("node_directory init failed")?;
    let catalog_gateway = CatalogGateway::init(&config.catalog_gateway, node_directory.client())
        .context("catalog_gateway init failed")?;

    Ok(Modules {
        node_directory,
        catalog_gateway,
    })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Full HTTP application: module routes and `/health` under the base path,
/// with request tracing and the request timeout applied.
#[must_use]
pub fn build_router(config: &AppConfig, modules: &Modules) -> Router {
    let base_path = config.server.base_path.as_str();
    let api = modules
        .catalog_gateway
        .router(base_path)
        .route("/health", get(health));

    let app = if base_path == "/" {
        Router::new().merge(api)
    } else {
        Router::new().nest(base_path, api)
    };

    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.server.request_timeout,
    ))
    .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl+C or SIGTERM, then drain in-flight requests.
///
/// # Errors
/// Fails if a module cannot be initialized or the address cannot be bound.
pub async fn run(config: AppConfig) -> Result<()> {
    let modules = init_modules(&config)?;
    let app = build_router(&config, &modules);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        base_path = %config.server.base_path,
        nodes = modules.node_directory.service().list_all().len(),
        "fedcat server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed; shutting down");
            }
        })
        .await
        .context("HTTP server error")?;

    tracing::info!("fedcat server stopped");
    Ok(())
}
