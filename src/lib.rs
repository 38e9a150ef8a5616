//! item-api - a small JSON item service
//!
//! Demonstrates the request surface of a typical HTTP API:
//! - Path parameters, including a closed enum and a greedy file path
//! - Optional and boolean query parameters with length limits
//! - JSON request bodies validated against the `Item` schema
//! - Uniform 422 responses for every kind of invalid input

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
