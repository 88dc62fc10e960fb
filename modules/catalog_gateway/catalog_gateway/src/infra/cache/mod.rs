//! Cache-backed query execution.
//!
//! [`CatalogCache`] holds the catalogs last fetched per node. Adapters decide
//! whether they can run a query and filter the cache; [`CacheQueryEngine`]
//! fans a query out to every capable adapter.

pub mod adapter;
pub mod criterion;
pub mod engine;
pub mod store;

pub use adapter::{CacheQueryAdapter, InMemoryCacheAdapter};
pub use engine::CacheQueryEngine;
pub use store::CatalogCache;
