//! Catalog Gateway SDK
//!
//! Public contract of the `catalog_gateway` module:
//! - `CatalogGatewayClient` trait consumed by transports and other modules
//! - `QueryEngine` and `DocumentTransformer`, the two collaborators the
//!   gateway delegates to
//! - Query and catalog models (`CatalogQuery`, `QueryOutcome`, `RawCatalog`,
//!   `ProjectedCatalog`)
//! - `CatalogGatewayError` and `TransformError`
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_gateway_sdk::{CatalogGatewayClient, CatalogQuery, Criterion};
//!
//! let query = CatalogQuery::new(vec![Criterion::new("origin", "=", "http://a.example/dsp")]);
//! let catalogs = client.query(query).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::{CatalogGatewayClient, DocumentTransformer, QueryEngine};
pub use error::{CatalogGatewayError, TransformError};
pub use models::{CatalogQuery, Criterion, ProjectedCatalog, QueryOutcome, RawCatalog};

pub use node_directory_sdk::NodeRecord;
