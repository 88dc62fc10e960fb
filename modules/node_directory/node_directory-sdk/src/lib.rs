//! Node Directory SDK
//!
//! This crate provides the public API for the `node_directory` module:
//! - `NodeDirectoryClient` trait for inter-module communication
//! - `NodeRecord` model describing one participant endpoint
//! - `NodeDirectoryError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use node_directory_sdk::{NodeDirectoryClient, NodeRecord};
//!
//! let record = NodeRecord::new(
//!     "Node 1",
//!     "http://192.168.0.41:8282/protocol",
//!     vec!["dataspace-protocol-http".to_owned()],
//! );
//! client.register_node(record).await?;
//! let nodes = client.list_nodes().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::NodeDirectoryClient;
pub use error::{NodeDirectoryError, RecordValidationError};
pub use models::NodeRecord;
