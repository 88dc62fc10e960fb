pub mod error;
pub mod local_client;
pub mod projector;
pub mod service;
