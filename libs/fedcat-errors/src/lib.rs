//! Error response types shared by the fedcat HTTP surface.
//!
//! Modules map their domain errors into [`Problem`] in their `api::rest::error`
//! layer; nothing here knows about a specific module.
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod problem;
pub mod result;

pub use problem::{APPLICATION_PROBLEM_JSON, Problem, bad_request, internal_error};
pub use result::ApiResult;
