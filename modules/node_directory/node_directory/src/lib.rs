//! Node Directory Module
//!
//! Keeps the authoritative, in-process set of known participant nodes.
//! A node is identified by its endpoint URL; registering the same URL again
//! replaces the earlier record instead of adding a duplicate.
//!
//! Other modules reach the directory through
//! [`node_directory_sdk::NodeDirectoryClient`], obtained from
//! [`module::NodeDirectory::client`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use node_directory_sdk::{NodeDirectoryClient, NodeDirectoryError, NodeRecord};

// === MODULE DEFINITION ===
pub mod module;
pub use module::NodeDirectory;

// === INTERNAL MODULES ===
pub mod config;
#[doc(hidden)]
pub mod domain;
