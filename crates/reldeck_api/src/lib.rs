//! HTTP client for the release-analytics chat backend.
//!
//! The backend is consumed as a black box: one query string in, one
//! `result` string out. Reply parsing lives in `reldeck-core`; retry
//! policy stays with the caller.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ChatClient, QueryResult};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
