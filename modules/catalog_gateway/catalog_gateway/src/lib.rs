//! Catalog Gateway Module
//!
//! Accepts federated catalog queries, runs them through a [`QueryEngine`],
//! classifies the three possible outcomes and projects successful results into
//! their wire form. Node registration and discovery are forwarded to the node
//! directory.
//!
//! The default engine answers from an in-memory catalog cache
//! ([`infra::cache`]); the default transformer renders JSON-LD style catalog
//! objects ([`infra::transform`]).
//!
//! [`QueryEngine`]: catalog_gateway_sdk::QueryEngine
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use catalog_gateway_sdk::{
    CatalogGatewayClient, CatalogGatewayError, CatalogQuery, Criterion, DocumentTransformer,
    ProjectedCatalog, QueryEngine, QueryOutcome, RawCatalog, TransformError,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::CatalogGateway;

// === INTERNAL MODULES ===
pub mod api;
pub mod config;
#[doc(hidden)]
pub mod domain;
pub mod infra;
