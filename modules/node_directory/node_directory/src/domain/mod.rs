pub mod error;
pub mod local_client;
pub mod node_storage;
pub mod service;
